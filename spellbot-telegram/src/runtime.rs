//! Long-polling runtime: fetches updates from Telegram, spawns one handler
//! task per update, and drains in-flight tasks on shutdown.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use spellbot_core::ShutdownToken;
use teloxide::prelude::*;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

use crate::handler::UpdateHandler;

/// Telegram long-poll timeout, in seconds.
const POLL_TIMEOUT_SECS: u32 = 60;

/// Pause before re-polling after a failed getUpdates call.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// How long shutdown waits for in-flight handlers before aborting them.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Owns the poll loop and its shutdown token. `start` runs until `stop` is
/// called (or the token fires some other way), then drains handler tasks.
pub struct BotRuntime {
    bot: teloxide::Bot,
    handler: Arc<UpdateHandler>,
    shutdown: ShutdownToken,
}

impl BotRuntime {
    pub fn new(bot: teloxide::Bot, handler: Arc<UpdateHandler>) -> Self {
        Self {
            bot,
            handler,
            shutdown: ShutdownToken::new(),
        }
    }

    /// Signals the poll loop to stop. Idempotent and callable from any task.
    pub fn stop(&self) {
        info!("stopping bot");
        self.shutdown.shutdown();
    }

    /// Runs the poll loop until shutdown. getUpdates failures are logged and
    /// retried after a short pause; only the initial getMe is fatal.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<()> {
        let me = self
            .bot
            .get_me()
            .await
            .context("failed to connect to Telegram")?;
        info!(
            username = me.user.username.as_deref().unwrap_or(""),
            "bot initialized"
        );
        info!("starting bot");

        let mut offset: i32 = 0;
        let mut tasks: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("stopping bot");
                    break;
                }
                polled = self
                    .bot
                    .get_updates()
                    .offset(offset)
                    .timeout(POLL_TIMEOUT_SECS)
                    .send() =>
                {
                    match polled {
                        Ok(updates) => {
                            for update in updates {
                                offset = update.id.0 as i32 + 1;
                                self.dispatch(&mut tasks, update);
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "failed to fetch updates");
                            // Wait out the retry delay unless shutdown fires first.
                            let _ = tokio::time::timeout(
                                POLL_RETRY_DELAY,
                                self.shutdown.cancelled(),
                            )
                            .await;
                        }
                    }
                }
            }

            // Reap finished handler tasks without blocking the poll.
            while let Some(joined) = tasks.try_join_next() {
                if let Err(e) = joined {
                    error!(error = %e, "handler task failed");
                }
            }
        }

        self.drain(tasks).await;
        Ok(())
    }

    /// Spawns one handler task for the update and records its duration.
    fn dispatch(&self, tasks: &mut JoinSet<()>, update: teloxide::types::Update) {
        let handler = Arc::clone(&self.handler);
        let shutdown = self.shutdown.clone();
        tasks.spawn(async move {
            let update_id = update.id.0;
            let started = Instant::now();
            handler.handle_update(&shutdown, update).await;
            debug!(
                update_id,
                duration_ms = started.elapsed().as_millis() as u64,
                "update processed"
            );
        });
    }

    /// Waits for in-flight handlers up to [`SHUTDOWN_GRACE`], then aborts
    /// whatever is still running.
    async fn drain(&self, mut tasks: JoinSet<()>) {
        if tasks.is_empty() {
            return;
        }
        info!(in_flight = tasks.len(), "waiting for in-flight handlers");

        let drained = tokio::time::timeout(SHUTDOWN_GRACE, async {
            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    error!(error = %e, "handler task failed");
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!(
                aborted = tasks.len(),
                "handlers still running at deadline, aborting"
            );
            tasks.abort_all();
            while tasks.join_next().await.is_some() {}
        }
    }
}
