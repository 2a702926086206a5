//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, feeds wall-clock time to the game's gravity
//! timer, and redraws through the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::core::{GameConfig, GameState};
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;
use tui_blockfall::EventLog;

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let mut log = match config.log_path.as_deref() {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    eprintln!(
        "[Game] seed={} start_interval={}ms log={}",
        config.seed,
        config.start_interval_ms,
        config.log_path.as_deref().unwrap_or("off")
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    log.flush();
    if let Some(err) = log.take_error() {
        eprintln!("[Log] event log disabled: {}", err);
    }

    match &result {
        Ok(game) => eprintln!(
            "[Game] final score {} ({} rows, {} pieces){}",
            game.score(),
            game.rows_cleared(),
            game.pieces_locked(),
            if game.game_over() { ", game over" } else { "" }
        ),
        Err(e) => eprintln!("[Game] error: {:#}", e),
    }

    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<GameState> {
    let mut game = GameState::with_config(config);
    let view = GameView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(game);
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        drain_event(&mut game, log);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last.elapsed();
        if elapsed >= frame {
            last = Instant::now();
            game.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
            drain_event(&mut game, log);
        }
    }
}

fn drain_event(game: &mut GameState, log: &mut EventLog) {
    if let Some(ev) = game.take_last_event() {
        log.record(&ev, game);
    }
}
