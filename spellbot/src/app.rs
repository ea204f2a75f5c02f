//! Application wiring: builds every component from config and runs the bot
//! until a termination signal arrives.

use std::sync::Arc;

use anyhow::{Context, Result};
use spellbot_llm::DeepSeekClient;
use spellbot_storage::{SqliteUserStore, UserStore};
use spellbot_telegram::{BotRuntime, TelegramBot, UpdateHandler};
use teloxide::Bot;
use tracing::{error, info};

use crate::config::Config;

pub async fn run(config: Config) -> Result<()> {
    let store = SqliteUserStore::open(&config.sqlite_path)
        .await
        .context("failed to initialize database")?;
    let checker = DeepSeekClient::new(config.deepseek_api_key.clone());

    let bot = {
        let bot = Bot::new(config.telegram_token.clone());
        if let Some(ref url_str) = config.telegram_api_url {
            match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "invalid TELEGRAM_API_URL, using default");
                    bot
                }
            }
        } else {
            bot
        }
    };

    let store = Arc::new(store);
    let telegram = Arc::new(TelegramBot::new(bot.clone()));
    let handler = UpdateHandler::new(telegram, Arc::new(checker), store.clone());
    let runtime = Arc::new(BotRuntime::new(bot, Arc::new(handler)));

    let mut poller = {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move { runtime.start().await })
    };

    tokio::select! {
        _ = wait_for_signal() => {
            info!("received signal, shutting down");
            runtime.stop();
            poller.await.context("bot runtime task panicked")??;
        }
        joined = &mut poller => {
            // The runtime only returns on its own when startup fails.
            joined.context("bot runtime task panicked")??;
        }
    }

    store.close().await;
    info!("shutdown complete");
    Ok(())
}

/// Completes on SIGINT or SIGTERM.
async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
