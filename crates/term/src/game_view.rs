//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Besides painting, it reports where the
//! clickable buttons ended up so pointer input can be hit-tested against the
//! exact frame the player is looking at.

use arrayvec::ArrayVec;

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    ControlButton, Hitbox, NeonColor, Phase, PieceKind, Rect, BOARD_HEIGHT, BOARD_WIDTH,
};

/// Buttons placed during one render
pub type Hitboxes = ArrayVec<Hitbox, 9>;

const BACKDROP: Rgb = Rgb::new(10, 10, 15);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Shell-side toggles shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioStatusView {
    pub sound: bool,
    pub music: bool,
}

impl Default for AudioStatusView {
    fn default() -> Self {
        Self {
            sound: true,
            music: false,
        }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered board frame in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer and return the button hitboxes.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated
    /// when the viewport grows.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        audio: AudioStatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Hitboxes {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, PANEL_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let panel_w = 18;
        let total_w = frame_w + 2 + panel_w;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let board_style = CellStyle::new(Rgb::new(40, 40, 50), BACKDROP);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            board_style,
        );
        self.draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(NeonColor::Cyan.into(), PANEL_BG),
        );

        // Locked cells and grid.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_board_cell(
                        fb,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        *color,
                        false,
                    ),
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Active piece; minos above the top edge are not visible.
        if let Some(active) = snap.active {
            let color = active.kind.color();
            for (dx, dy) in active.shape.minos() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, color, true);
                }
            }
        }

        let mut hitboxes = Hitboxes::new();
        let panel_x = start_x + frame_w + 2;
        if panel_x.saturating_add(panel_w) <= viewport.width {
            self.draw_side_panel(fb, snap, audio, panel_x, start_y, &mut hitboxes);
        }

        self.draw_overlay(fb, snap, start_x, start_y, frame_w, frame_h);

        let legend_y = start_y + frame_h;
        if legend_y < viewport.height {
            let legend = "←→ move  ↓ drop  ↑/SPACE rotate  ENTER hard  P pause";
            let style = CellStyle::new(NeonColor::Violet.into(), PANEL_BG).dim();
            fb.put_str(start_x, legend_y, legend, style);
        }

        hitboxes
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        audio: AudioStatusView,
        viewport: Viewport,
    ) -> (FrameBuffer, Hitboxes) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let hitboxes = self.render_into(snap, audio, viewport, &mut fb);
        (fb, hitboxes)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┏', style);
        fb.put_char(x + w - 1, y, '┓', style);
        fb.put_char(x, y + h - 1, '┗', style);
        fb.put_char(x + w - 1, y + h - 1, '┛', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '━', style);
            fb.put_char(x + dx, y + h - 1, '━', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '┃', style);
            fb.put_char(x + w - 1, y + dy, '┃', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let grid = Rgb::from(NeonColor::Cyan).scaled(40);
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', CellStyle::new(grid, BACKDROP));
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: NeonColor,
        active: bool,
    ) {
        let fg = Rgb::from(color);
        let mut style = CellStyle::new(fg, fg.scaled(60));
        if active {
            style = style.bold();
        }
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        audio: AudioStatusView,
        x: u16,
        start_y: u16,
        hitboxes: &mut Hitboxes,
    ) {
        let label = CellStyle::new(NeonColor::Violet.into(), PANEL_BG).bold();
        let big = CellStyle::new(NeonColor::Cyan.into(), PANEL_BG).bold();
        let value = CellStyle::new(NeonColor::Mint.into(), PANEL_BG);

        let mut y = start_y;
        for (name, n, style) in [
            ("SCORE", snap.score, big),
            ("LEVEL", snap.level, value),
            ("LINES", snap.lines, value),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, style);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", CellStyle::new(NeonColor::Cyan.into(), PANEL_BG).bold());
        if let Some(kind) = snap.next {
            self.draw_preview(fb, x + 1, y + 1, kind);
        }
        y += 4;

        let playing = snap.phase == Phase::Playing;
        let paused = snap.phase == Phase::Paused;
        let start_label = if snap.phase == Phase::GameOver {
            "▶ NEW GAME"
        } else {
            "▶ START"
        };
        let pause_label = if paused { "▶ RESUME" } else { "❚❚ PAUSE" };
        let music_label = if audio.music { "♪ MUSIC ON" } else { "♪ MUSIC OFF" };
        let sound_label = if audio.sound { "♫ SOUND ON" } else { "♫ SOUND OFF" };

        let mut place = |fb: &mut FrameBuffer, bx: u16, by: u16, text: &str, button, enabled| {
            let rect = self.draw_button(fb, bx, by, text, button_color(button), enabled);
            hitboxes.push(Hitbox { rect, button });
            rect.w
        };

        place(fb, x, y, start_label, ControlButton::Start, true);
        place(fb, x, y + 1, pause_label, ControlButton::Pause, playing || paused);
        place(fb, x, y + 2, music_label, ControlButton::Music, true);
        place(fb, x, y + 3, sound_label, ControlButton::Sound, true);
        y += 5;

        let mut bx = x;
        for (text, button) in [
            ("←", ControlButton::Left),
            ("⟳", ControlButton::Rotate),
            ("→", ControlButton::Right),
        ] {
            bx += place(fb, bx, y, text, button, playing) + 1;
        }
        let bx = x + place(fb, x, y + 1, "↓", ControlButton::Down, playing) + 1;
        place(fb, bx, y + 1, "HARD DROP", ControlButton::HardDrop, playing);
    }

    /// Draw a `[ label ]` button and return its rectangle.
    fn draw_button(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        text: &str,
        color: NeonColor,
        enabled: bool,
    ) -> Rect {
        let mut style = CellStyle::new(WHITE, Rgb::from(color).scaled(110)).bold();
        if !enabled {
            style = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(25, 25, 30)).dim();
        }
        let mut cx = fb.put_str(x, y, "[ ", style);
        cx = fb.put_str(cx, y, text, style);
        cx = fb.put_str(cx, y, " ]", style);
        Rect::new(x, y, cx.saturating_sub(x), 1)
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = Shape::of(kind);
        let fg = Rgb::from(kind.color());
        let style = CellStyle::new(fg, PANEL_BG).bold();
        for (dx, dy) in shape.minos() {
            fb.fill_rect(x + dx as u16 * 2, y + dy as u16, 2, 1, '█', style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        match snap.phase {
            Phase::Playing => {}
            Phase::Idle => {
                let title = CellStyle::new(NeonColor::Cyan.into(), PANEL_BG).bold();
                let hint = CellStyle::new(NeonColor::Violet.into(), PANEL_BG);
                self.centered(
                    fb,
                    start_x,
                    frame_w,
                    mid_y.saturating_sub(1),
                    "ATOMIC TETRIS",
                    title,
                );
                self.centered(fb, start_x, frame_w, mid_y + 1, "press N to start", hint);
            }
            Phase::Paused => {
                let style = CellStyle::new(NeonColor::Mint.into(), PANEL_BG).bold();
                self.centered(fb, start_x, frame_w, mid_y, "PAUSED", style);
            }
            Phase::GameOver => {
                let title = CellStyle::new(NeonColor::Cyan.into(), PANEL_BG).bold();
                let score = CellStyle::new(NeonColor::Violet.into(), PANEL_BG);
                self.centered(fb, start_x, frame_w, mid_y.saturating_sub(1), "GAME OVER", title);

                // "Score: N", centered as one string.
                let digits = digit_count(snap.score);
                let w = 7 + digits;
                let x = start_x.saturating_add(frame_w.saturating_sub(w) / 2);
                let cx = fb.put_str(x, mid_y + 1, "Score: ", score);
                fb.put_u32(cx, mid_y + 1, snap.score, score);
            }
        }
    }

    fn centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn button_color(button: ControlButton) -> NeonColor {
    match button {
        ControlButton::Start | ControlButton::Left | ControlButton::Right => NeonColor::Cyan,
        ControlButton::Pause | ControlButton::Down | ControlButton::HardDrop => NeonColor::Mint,
        ControlButton::Music | ControlButton::Sound | ControlButton::Rotate => NeonColor::Violet,
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_294_967_295), 10);
    }

    #[test]
    fn every_button_has_a_color() {
        for b in ControlButton::ALL {
            let _ = button_color(b);
        }
        assert_eq!(button_color(ControlButton::Rotate), NeonColor::Violet);
    }
}
