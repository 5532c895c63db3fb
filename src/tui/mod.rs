pub mod app;
pub mod components;
pub mod events;
pub mod reveal;
pub mod routes;
pub mod screens;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use events::{Event, EventHandler};
pub use routes::Route;
pub use theme::Theme;

use std::sync::Arc;
use tracing::{error, info};

use crate::app::AppConfig;
use crate::chat::AskBackend;
use crate::error::Result;

/// Runs the interactive course browser until the user quits.
pub async fn run(config: &AppConfig, backend: Arc<dyn AskBackend>, start: Route) -> Result<()> {
    let mut terminal = terminal::init_terminal()?;
    let result = event_loop(&mut terminal, config, backend, start).await;

    if let Err(e) = terminal::restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }
    result
}

async fn event_loop(
    terminal: &mut terminal::Tui,
    config: &AppConfig,
    backend: Arc<dyn AskBackend>,
    start: Route,
) -> Result<()> {
    let mut events = EventHandler::new(config.ui.tick_rate());
    let mut app = App::new(config, backend, events.sender(), start);
    info!(route = start.path(), "TUI started");

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        // None means nothing happened this round
        if let Some(event) = events.next().await {
            app.handle_event(event);
        }
    }

    info!("TUI closed");
    Ok(())
}
