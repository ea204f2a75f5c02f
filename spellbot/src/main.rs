//! Binary entry point for the spell-checking Telegram bot.

mod app;
mod config;

use spellbot_core::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Config comes first; the debug flag decides the log level.
    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_tracing(config.debug_mode) {
        eprintln!("failed to initialize logging: {e}");
        std::process::exit(1);
    }

    info!(debug_mode = config.debug_mode, "starting spell bot application");

    if let Err(e) = app::run(config).await {
        error!(error = ?e, "application error");
        std::process::exit(1);
    }
}
