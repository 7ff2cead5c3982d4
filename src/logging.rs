use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the console subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` or `info` depending on `debug_mode`.
/// Fails if a global subscriber is already installed.
pub fn setup_logging(debug_mode: bool) -> Result<()> {
    let default_level = if debug_mode { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    tracing::info!("Logging initialized: debug={}", debug_mode);
    Ok(())
}
