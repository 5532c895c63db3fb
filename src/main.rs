use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

use aiml_course::app::{init_logging, AppConfig};
use aiml_course::chat::{ChatController, ExchangeStatus, HttpAskClient};
use aiml_course::cli::{Cli, Commands};
use aiml_course::error::Result;
use aiml_course::platform::AppPaths;
use aiml_course::tui::{self, Route};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut paths = AppPaths::new()?;
    if let Some(config_file) = &cli.config {
        paths = paths.with_config_file(config_file);
    }
    paths.ensure_dirs_exist()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&paths.logs_dir(), cli.debug)?;
    info!("Starting aiml-course {}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load(&paths).await?;
    if let Some(endpoint) = &cli.endpoint {
        info!("Using endpoint override: {}", endpoint);
        config.override_endpoint(endpoint)?;
    }

    match cli.command() {
        Commands::Tui { route } => {
            let start = Route::resolve(&route).unwrap_or_else(|| {
                warn!("Unknown route '{}', starting on the course overview", route);
                Route::Home
            });
            let client = HttpAskClient::from_config(&config.endpoint)?;
            tui::run(&config, Arc::new(client), start).await?;
            Ok(ExitCode::SUCCESS)
        }
        command @ Commands::Ask { .. } => {
            let client = HttpAskClient::from_config(&config.endpoint)?;
            ask_once(&client, command.prompt().unwrap_or_default()).await
        }
        Commands::Config => {
            println!("# {}", paths.config_file().display());
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn ask_once(client: &HttpAskClient, prompt: String) -> Result<ExitCode> {
    let mut controller = ChatController::new();
    controller.set_input(prompt);
    controller.submit(client).await;

    let exchange = controller.exchange();
    match exchange.status {
        ExchangeStatus::Succeeded => {
            println!("{}", exchange.response_text.as_deref().unwrap_or_default());
            Ok(ExitCode::SUCCESS)
        }
        ExchangeStatus::Failed => {
            eprintln!("{}", exchange.error_message.as_deref().unwrap_or_default());
            Ok(ExitCode::FAILURE)
        }
        // Blank prompt: nothing was sent
        ExchangeStatus::Idle | ExchangeStatus::Pending => Ok(ExitCode::SUCCESS),
    }
}
