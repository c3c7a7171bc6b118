use atomic_tetris::core::{GameSnapshot, GameState};
use atomic_tetris::engine::Controller;
use atomic_tetris::input::{handle_mouse_event, hit_test};
use atomic_tetris::term::{AudioStatusView, FrameBuffer, GameView, Viewport};
use atomic_tetris::types::{
    ControlAction, ControlButton, GameAction, NeonColor, Phase, PieceKind, Rect,
};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn started(seed: u32) -> GameSnapshot {
    let mut gs = GameState::new(seed);
    gs.start();
    gs.snapshot()
}

fn wide() -> Viewport {
    Viewport::new(60, 24)
}

fn label_at(fb: &FrameBuffer, rect: Rect) -> String {
    (rect.x..rect.x + rect.w)
        .filter_map(|x| fb.get(x, rect.y).map(|c| c.ch))
        .collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the bordered frame is 22x22.
    let (fb, hitboxes) = view.render(&snap, AudioStatusView::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┏');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┓');
    assert_eq!(fb.get(0, 21).unwrap().ch, '┗');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┛');
    // No room for the side panel, so no buttons either.
    assert!(hitboxes.is_empty());
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Some(NeonColor::Violet);

    let view = GameView::default();
    let (fb, _) = view.render(&snap, AudioStatusView::default(), Viewport::new(22, 22));

    let a = fb.get(1, 20).unwrap();
    let b = fb.get(2, 20).unwrap();
    assert_eq!((a.ch, b.ch), ('█', '█'));
    assert_eq!(a.style.fg.r, 0xDC);
    assert_ne!(fb.get(3, 20).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_bold() {
    let snap = started(5);
    let active = snap.active.unwrap();
    let view = GameView::default();
    let (fb, _) = view.render(&snap, AudioStatusView::default(), Viewport::new(22, 22));

    for (dx, dy) in active.shape.minos() {
        let x = 1 + (active.x + dx) as u16 * 2;
        let y = 1 + (active.y + dy) as u16;
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert!(cell.style.bold);
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = started(1);
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.next = Some(PieceKind::T);

    let (fb, hitboxes) = GameView::default().render(&snap, AudioStatusView::default(), wide());
    let all = fb.text();

    for word in ["SCORE", "1234", "LEVEL", "LINES", "NEXT", "HARD DROP", "SOUND ON", "MUSIC OFF"] {
        assert!(all.contains(word), "missing {word}");
    }
    assert_eq!(hitboxes.len(), ControlButton::ALL.len());
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let audio = AudioStatusView::default();

    let idle = GameState::new(1).snapshot();
    assert!(view.render(&idle, audio, wide()).0.text().contains("ATOMIC TETRIS"));

    let mut paused = started(1);
    paused.phase = Phase::Paused;
    let (fb, hitboxes) = view.render(&paused, audio, wide());
    assert!(fb.text().contains("PAUSED"));
    let pause = hitboxes
        .iter()
        .find(|h| h.button == ControlButton::Pause)
        .unwrap();
    assert!(label_at(&fb, pause.rect).contains("RESUME"));

    let mut over = started(1);
    over.phase = Phase::GameOver;
    over.active = None;
    over.score = 4200;
    let (fb, hitboxes) = view.render(&over, audio, wide());
    let text = fb.text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Score: 4200"));
    let start = hitboxes
        .iter()
        .find(|h| h.button == ControlButton::Start)
        .unwrap();
    assert!(label_at(&fb, start.rect).contains("NEW GAME"));
}

#[test]
fn term_view_hitboxes_do_not_overlap() {
    let (_, hitboxes) = GameView::default().render(&started(2), AudioStatusView::default(), wide());
    for (i, a) in hitboxes.iter().enumerate() {
        for b in hitboxes.iter().skip(i + 1) {
            for x in a.rect.x..a.rect.x + a.rect.w {
                assert!(!b.rect.contains(x, a.rect.y), "{:?} overlaps {:?}", a.button, b.button);
            }
        }
    }
}

#[test]
fn clicking_start_button_starts_the_game() {
    let mut controller = Controller::new(9);
    let view = GameView::default();
    let audio = AudioStatusView::default();
    let (_, hitboxes) = view.render(&controller.snapshot(), audio, wide());

    let start = hitboxes
        .iter()
        .find(|h| h.button == ControlButton::Start)
        .unwrap();
    let (col, row) = (start.rect.x + 1, start.rect.y);
    assert_eq!(hit_test(&hitboxes, col, row), Some(ControlButton::Start));

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: col,
        row,
        modifiers: KeyModifiers::NONE,
    };
    let Some(ControlAction::Game(action)) = handle_mouse_event(click, &hitboxes) else {
        panic!("start button did not map to a game action");
    };
    assert_eq!(action, GameAction::Start);
    assert!(controller.dispatch(action, 0).redraw);
    assert_eq!(controller.state().phase(), Phase::Playing);
}

#[test]
fn render_into_reuses_framebuffer() {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&started(3), AudioStatusView::default(), wide(), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 24));

    let (fresh, _) = view.render(&started(3), AudioStatusView::default(), wide());
    assert_eq!(fb, fresh);
}
