//! Conduit - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conduit_api::{
    cli::{Cli, Commands},
    commands,
    config::{Settings, DEBUG_LOG_LEVEL, DEFAULT_LOG_LEVEL},
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load settings first so the profile can pick the default log level
    let settings = Settings::from_env();
    let default_level = settings
        .as_ref()
        .map(|s| s.log_level.clone())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    init_tracing(cli.verbose, default_level);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(
        app_env = %settings.app_env,
        secret_key_configured = settings.secret_key().is_some(),
        "Settings loaded"
    );

    // Execute command
    let result = match cli.command {
        Commands::Db(args) => commands::db::execute(args, &settings).await,
        Commands::Users(args) => commands::users::execute(args, &settings).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, default_level: String) {
    let filter = if verbose {
        DEBUG_LOG_LEVEL.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or(default_level)
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
