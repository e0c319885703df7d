//! Terminal runner (default binary).
//!
//! Reads `BLOCKFALL_*` settings from the environment, then runs a fixed 16ms
//! frame loop: draw, apply pending key presses, advance the gravity timer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::{BoardSnapshot, Session, SessionConfig};
use blockfall::input::{handle_key_event, is_actionable, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut config = SessionConfig::from_env();
    if std::env::var_os("BLOCKFALL_SEED").is_none() {
        config.seed = clock_seed();
    }
    config.validate()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.clone());

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    eprintln!(
        "[blockfall] {}x{} board, seed {}, randomizer {}: score {}, lines {}",
        config.width,
        config.height,
        config.seed,
        config.randomizer.as_str(),
        summary.score,
        summary.lines
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: SessionConfig) -> Result<BoardSnapshot> {
    let mut session = Session::new(config);
    let view = GameView::default();

    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if should_quit(key) {
                        return Ok(snap);
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
