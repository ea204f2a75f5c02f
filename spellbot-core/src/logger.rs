//! Tracing initialization: structured JSON records on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initializes the global tracing subscriber with a JSON formatter.
///
/// The default level is `info`, raised to `debug` when `debug_mode` is set.
/// `RUST_LOG` overrides both when present. Call once at startup, after
/// loading `.env`, or `RUST_LOG` from the file will not take effect.
pub fn init_tracing(debug_mode: bool) -> anyhow::Result<()> {
    let default_level = if debug_mode { "debug" } else { "info" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_level(true);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
