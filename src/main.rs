//! Terminal Connect Four runner (default binary).
//!
//! Two players share one keyboard. Uses crossterm for input and a
//! framebuffer-based renderer that only observes the game state.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use connect_four::config::AppConfig;
use connect_four::core::GameState;
use connect_four::input::{handle_key_event, should_quit, ColumnCursor};
use connect_four::journal::Journal;
use connect_four::term::{
    frame_fingerprint, FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport,
};
use connect_four::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    // Opened before raw mode so a warning about a bad path stays readable.
    let mut journal = Journal::from_config(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, journal: &mut Journal) -> Result<()> {
    let mut game = GameState::new();
    journal.record_start(&game);

    let view = GameView::new(config.cell_width, config.cell_height);
    let mut cursor = ColumnCursor::new();
    let mut throttle = RenderThrottle::new(config.static_redraw_ms);
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let poll_interval = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = game.snapshot();
        let fingerprint = frame_fingerprint(&snap, cursor.column(), viewport);
        if throttle.should_render(clock.elapsed().as_millis() as u64, fingerprint) {
            view.render_into(&snap, cursor.column(), viewport, &mut fb);
            term.draw(&fb)?;
        }

        if !event::poll(poll_interval)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                let Some(action) = handle_key_event(key).and_then(|k| cursor.apply(k)) else {
                    continue;
                };

                // The cursor never leaves the board, so an invalid column here is a bug.
                game.apply_action(action)?;

                if action == GameAction::Restart {
                    journal.record_start(&game);
                }
                let events = game.take_events();
                journal.record_events(&game, &events);
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
