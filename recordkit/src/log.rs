use tracing::Level;
use tracing_core::LevelFilter;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;
use tracing_subscriber::{fmt, Registry};

pub const LOG_ENV: &str = "RECORDKIT_LOG";

pub(crate) fn parse_level(value: Option<String>) -> Level {
    match value {
        Some(level) => level.parse::<Level>().unwrap_or(Level::INFO),
        None => Level::INFO,
    }
}

/// Level read from `RECORDKIT_LOG`, `INFO` when unset or unreadable.
pub fn log_level() -> Level {
    parse_level(std::env::var(LOG_ENV).ok())
}

/// Installs a global fmt subscriber filtered at [`log_level`]. Panics if a
/// global subscriber is already set; see [`try_init_tracing`].
pub fn init_tracing() {
    Registry::default()
        .with(fmt::layer().with_filter(LevelFilter::from_level(log_level())))
        .init()
}

pub fn try_init_tracing() -> Result<(), TryInitError> {
    Registry::default()
        .with(fmt::layer().with_filter(LevelFilter::from_level(log_level())))
        .try_init()
}
