//! Terminal blockfall runner (default binary).
//!
//! Raw-mode event loop: polls key events between frames, feeds measured
//! elapsed time into the game loop, and redraws from a fresh snapshot.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::engine::GameLoop;
use blockfall::input::{handle_key_event, should_quit, KeyAction};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Frame interval; gravity runs on its own 1000 ms schedule inside the loop.
const FRAME_MS: u64 = 33;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameLoop::new(clock_seed());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_advance = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if event::poll(frame)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(KeyAction::Game(command)) => {
                            game.handle_command(command);
                        }
                        Some(KeyAction::TogglePause) => game.toggle_pause(),
                        Some(KeyAction::Restart) => game.restart(),
                        None => {}
                    }
                }
            }
        }

        let elapsed = last_advance.elapsed();
        last_advance = Instant::now();
        game.advance(elapsed.as_millis() as u32);
    }
}

/// Seed the piece sequence from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
