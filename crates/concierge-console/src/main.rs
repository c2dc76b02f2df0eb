use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use concierge_core::config::BackendKind;
use concierge_infrastructure::ConfigService;

mod bootstrap;
mod command;
mod logging;
mod render;
mod repl;

#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "Concierge - operator console for AI-assisted traveler communications", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/concierge/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use the in-memory demo backend whatever the config says
    #[arg(long)]
    fixture: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = ConfigService::new(cli.config);
    let mut config = service.load().with_context(|| {
        format!(
            "failed to load configuration from {}",
            service
                .config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "<unknown>".to_string())
        )
    })?;

    if cli.fixture {
        config.backend.kind = BackendKind::Fixture;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.json = true;
    }

    logging::init(&config.logging);
    tracing::debug!("Configuration: {:?}", config.backend.kind);

    let state = bootstrap::build_console(&config).context("failed to set up backend")?;
    repl::run(state, config.backend.kind == BackendKind::Fixture).await
}
