//! Atomic Tetris runner (default binary).
//!
//! Single-threaded event loop: terminal input and the gravity deadline are
//! serialized here, and the frame is redrawn after every state change.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use atomic_tetris::audio::Audio;
use atomic_tetris::engine::Controller;
use atomic_tetris::input::{handle_key_event, handle_mouse_event, should_quit};
use atomic_tetris::term::{
    AudioStatusView, FrameBuffer, GameView, Hitboxes, TerminalRenderer, Viewport,
};
use atomic_tetris::types::ControlAction;
use atomic_tetris::{logging, Config};

/// Upper bound on one wait so the music download gets polled while idle.
const MAX_WAIT: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Err(err) = logging::init(config.log_path.as_deref()) {
        eprintln!("logging disabled: {err:#}");
    }
    log::info!("atomic-tetris starting (seed {})", config.seed);

    let mut audio = Audio::new(config.audio_settings());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut audio, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, audio: &mut Audio, seed: u32) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut controller = Controller::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut hitboxes = Hitboxes::new();
    let mut redraw = true;

    loop {
        audio.pump();

        if redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let status = AudioStatusView {
                sound: audio.sound_enabled(),
                music: audio.music_enabled(),
            };
            let viewport = Viewport::new(w, h);
            hitboxes = view.render_into(&controller.snapshot(), status, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }

        // Sleep until input arrives or gravity is due.
        let timeout = controller
            .next_deadline_ms()
            .map(|deadline| Duration::from_millis(deadline.saturating_sub(now_ms())))
            .unwrap_or(MAX_WAIT)
            .min(MAX_WAIT);

        if event::poll(timeout)? {
            let control = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, &hitboxes),
                Event::Resize(..) => {
                    term.invalidate();
                    redraw = true;
                    None
                }
                _ => None,
            };

            if let Some(control) = control {
                redraw |= apply_control(control, &mut controller, audio, now_ms());
            }
        }

        let outcome = controller.poll(now_ms());
        if outcome.redraw {
            audio.on_events(&outcome.events);
            audio.sync_music(controller.state().phase());
            redraw = true;
        }
    }
}

/// Route one control to the game or the audio toggles; returns whether to redraw.
fn apply_control(
    control: ControlAction,
    controller: &mut Controller,
    audio: &mut Audio,
    now_ms: u64,
) -> bool {
    match control {
        ControlAction::Game(action) => {
            let outcome = controller.dispatch(action, now_ms);
            if outcome.redraw {
                audio.on_events(&outcome.events);
                audio.sync_music(controller.state().phase());
            }
            outcome.redraw
        }
        ControlAction::ToggleSound => {
            audio.toggle_sound();
            true
        }
        ControlAction::ToggleMusic => {
            audio.toggle_music();
            true
        }
    }
}
