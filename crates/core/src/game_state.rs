//! Game state module - manages the complete game state
//!
//! This module ties together the board, shapes, RNG, and scoring. It owns the
//! falling piece state machine:
//!
//! ```text
//! falling --(down blocked)--> locking --> line clear --> respawn
//!                                                          |
//!                                         (spawn collides) +--> game over
//! ```
//!
//! Every public operation clears the event buffer first, so after a call
//! [`GameState::events`] holds exactly what that call produced.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::PieceRandomizer;
use crate::scoring::{calculate_level, calculate_line_score, get_drop_interval_ms};
use crate::shape::{MinoOffset, Shape};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centered on the top row
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    pub fn color(&self) -> NeonColor {
        self.kind.color()
    }

    /// Absolute board coordinates of every mino
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        self.shape.minos().map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Rows this piece can still fall before it would collide
    pub fn drop_distance(&self, board: &Board) -> u8 {
        let mut distance: u8 = 0;
        while !board.collides(&self.shape, self.x, self.y + distance as i8 + 1) {
            distance += 1;
        }
        distance
    }
}

/// Something that happened during one state transition.
///
/// Consumed by the shell for sound cues and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    /// Sideways move succeeded
    Moved,
    Rotated,
    /// Player-requested one-row drop succeeded
    SoftDropped,
    HardDropped { rows: u8 },
    Locked { kind: PieceKind },
    LinesCleared { lines: u32, points: u32 },
    LevelUp { level: u32 },
    Paused,
    Resumed,
    GameOver { score: u32 },
}

impl GameEvent {
    /// Sound cue for this event, if any
    pub fn sound(&self) -> Option<SoundEvent> {
        match self {
            GameEvent::Moved => Some(SoundEvent::Move),
            GameEvent::Rotated => Some(SoundEvent::Rotate),
            GameEvent::Locked { .. } => Some(SoundEvent::Drop),
            GameEvent::LinesCleared { .. } => Some(SoundEvent::Clear),
            GameEvent::GameOver { .. } => Some(SoundEvent::GameOver),
            _ => None,
        }
    }
}

/// Events produced by one operation
pub type Events = ArrayVec<GameEvent, 8>;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Option<PieceKind>,
    randomizer: PieceRandomizer,
    score: u32,
    level: u32,
    lines: u32,
    playing: bool,
    paused: bool,
    game_over: bool,
    events: Events,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            randomizer: PieceRandomizer::new(seed),
            score: 0,
            level: START_LEVEL,
            lines: 0,
            playing: false,
            paused: false,
            game_over: false,
            events: Events::new(),
        }
    }

    /// Build a game already in progress.
    ///
    /// Returns `None` if `active` collides with `board`. Used for scripted
    /// scenarios and benchmarks.
    pub fn in_progress(seed: u32, board: Board, active: Piece, next: PieceKind) -> Option<Self> {
        if active.collides(&board) {
            return None;
        }
        let mut state = Self::new(seed);
        state.board = board;
        state.active = Some(active);
        state.next = Some(next);
        state.playing = true;
        Some(state)
    }

    /// Reset everything and start a fresh game.
    ///
    /// Allowed from any phase; a running game is abandoned.
    pub fn start(&mut self) {
        self.events.clear();
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.playing = true;
        self.next = Some(self.randomizer.draw());
        self.events.push(GameEvent::Started);
        self.spawn_piece();
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// True while gravity and piece input apply
    pub fn is_running(&self) -> bool {
        self.playing && !self.paused && !self.game_over
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if !self.playing {
            Phase::Idle
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Playing
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Events produced by the most recent operation
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        get_drop_interval_ms(self.level)
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active.map(crate::snapshot::ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        self.events.clear();

        match action {
            GameAction::Start => {
                self.start();
                true
            }
            GameAction::Pause => self.toggle_pause(),
            _ if !self.is_running() || self.active.is_none() => false,
            GameAction::MoveLeft => self.shift(-1),
            GameAction::MoveRight => self.shift(1),
            GameAction::SoftDrop => self.descend(true),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// One gravity step: move down a row, or lock if blocked.
    ///
    /// Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        self.events.clear();
        if !self.is_running() {
            return false;
        }
        self.descend(false)
    }

    fn toggle_pause(&mut self) -> bool {
        if !self.playing || self.game_over {
            return false;
        }
        self.paused = !self.paused;
        self.events.push(if self.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
        true
    }

    /// Try to translate the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.collides(&active.shape, active.x + dx, active.y + dy) {
            return false;
        }

        self.active = Some(Piece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    fn shift(&mut self, dx: i8) -> bool {
        if self.try_move(dx, 0) {
            self.events.push(GameEvent::Moved);
            return true;
        }
        false
    }

    fn descend(&mut self, requested: bool) -> bool {
        if self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            if requested {
                self.events.push(GameEvent::SoftDropped);
            }
        } else {
            self.lock_piece();
        }
        true
    }

    /// Rotate clockwise in place; rejected if the rotated shape collides
    fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if self.board.collides(&rotated, active.x, active.y) {
            return false;
        }

        self.active = Some(Piece {
            shape: rotated,
            ..active
        });
        self.events.push(GameEvent::Rotated);
        true
    }

    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rows = active.drop_distance(&self.board);
        self.active = Some(Piece {
            y: active.y + rows as i8,
            ..active
        });
        self.events.push(GameEvent::HardDropped { rows });
        self.lock_piece();
        true
    }

    /// Merge the active piece, clear lines, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.shape, active.x, active.y, active.color());
        self.events.push(GameEvent::Locked { kind: active.kind });

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            let points = calculate_line_score(cleared, self.level);
            self.score = self.score.saturating_add(points);
            self.lines += cleared;
            self.events.push(GameEvent::LinesCleared {
                lines: cleared,
                points,
            });

            let level = calculate_level(self.lines);
            if level > self.level {
                self.level = level;
                self.events.push(GameEvent::LevelUp { level });
            }
        }

        self.spawn_piece();
    }

    /// Spawn the queued piece and queue a new one.
    ///
    /// Ends the game if the new piece collides at its spawn position.
    fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.randomizer.draw(),
        };
        self.next = Some(self.randomizer.draw());

        let piece = Piece::spawn(kind);
        if piece.collides(&self.board) {
            self.active = None;
            self.game_over = true;
            self.playing = false;
            self.events.push(GameEvent::GameOver { score: self.score });
            return false;
        }

        self.active = Some(piece);
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
