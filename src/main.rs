//! Terminal 2048 runner (default binary).
//!
//! Blocks on terminal input; every key press is applied to the engine and the
//! frame is redrawn before the next event is read. Uses crossterm for input
//! and the framebuffer renderer from `tui-2048-term`.

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info, warn};

use tui_2048::config::AppConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{action_for_event, should_quit};
use tui_2048::session::SessionSummary;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    tui_2048::logging::init(&config)?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {:#}", err);
    }

    let snap = result?;
    let summary = SessionSummary::from_snapshot(&snap);
    info!("session finished: {:?}", summary);
    if let Some(line) = summary.render(config.summary)? {
        println!("{}", line);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<GameSnapshot> {
    let mut game = GameState::new(seed);
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(snap);
                }
                let Some(action) = action_for_event(key) else {
                    continue;
                };
                let changed = game.apply_action(action);
                debug!("{}: changed {}", action.as_str(), changed);
                if changed && game.game_over() {
                    info!("episode {} over at score {}", game.episode_id(), game.score());
                }
                if action == GameAction::Restart {
                    info!("restarted, episode {}", game.episode_id());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
