//! Terminal UI for broadside.

mod app;
mod input;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as term, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::config::ClientConfig;
use crate::machine::{Effect, Event};
use crate::sync::{Collaborator, GameId, HttpCollaborator, SyncController};

pub use app::App;
use input::Action;

/// Runs the TUI client against the configured scoring service.
///
/// Joins `game_id` if given, otherwise asks the service for a new game.
pub async fn run_tui(config: ClientConfig, game_id: Option<String>) -> Result<()> {
    init_tracing(config.log_file())?;
    info!(server_url = %config.server_url(), "Starting broadside");

    let collaborator = HttpCollaborator::new(config.server_url().clone(), config.request_timeout())
        .context("Failed to build HTTP client")?;
    let controller = SyncController::connect(collaborator, game_id.map(GameId::from))
        .await
        .with_context(|| format!("Failed to start a game at {}", config.server_url()))?;
    info!(game_id = %controller.game_id(), "Connected to scoring service");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, controller).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn init_tracing(log_file: &Path) -> Result<()> {
    // The terminal belongs to the UI, so logs go to a file.
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,broadside=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all, fields(game_id = %controller.game_id()))]
async fn run_loop<B, C>(terminal: &mut Terminal<B>, controller: SyncController<C>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    C: Collaborator + 'static,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (mut app, effects) = App::new(controller.game_id().clone());
    spawn_effects(&controller, effects, &event_tx);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            let effects = app.dispatch(event);
            spawn_effects(&controller, effects, &event_tx);
        }

        if term::poll(Duration::from_millis(100))?
            && let TermEvent::Key(key) = term::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match input::map_key(key) {
                Some(Action::Quit) => {
                    info!("User quit");
                    return Ok(());
                }
                Some(action) => {
                    let effects = app.handle(action);
                    spawn_effects(&controller, effects, &event_tx);
                }
                None => {}
            }
        }
    }
}

/// Runs each effect on its own task and feeds the result back as an event.
fn spawn_effects<C: Collaborator + 'static>(
    controller: &SyncController<C>,
    effects: Vec<Effect>,
    event_tx: &mpsc::UnboundedSender<Event>,
) {
    for effect in effects {
        let controller = controller.clone();
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            let event = match effect {
                Effect::Execute(mutation) => match controller.execute(&mutation).await {
                    Ok(outcome) => Event::Synced(outcome),
                    Err(failure) => Event::SyncFailed(failure),
                },
                Effect::Refresh => match controller.refresh().await {
                    Ok(snapshot) => Event::Loaded(snapshot),
                    Err(err) => Event::LoadFailed(err),
                },
            };
            if event_tx.send(event).is_err() {
                debug!("Event loop closed, dropping result");
            }
        });
    }
}
