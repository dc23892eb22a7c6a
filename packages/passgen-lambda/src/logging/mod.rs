use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::logging::{
    fmt::{LoggingFormatConfig, LoggingFormatConfigError, filter_layer, fmt_layer},
    sentry::{SentryLoggingConfig, sentry_layer},
};

pub mod fmt;
pub mod sentry;

/// Output format and sentry reporting settings for logging
#[derive(Default)]
pub struct LoggingConfig {
    pub format: LoggingFormatConfig,
    pub sentry: SentryLoggingConfig,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, LoggingFormatConfigError> {
        Ok(Self {
            format: LoggingFormatConfig::from_env()?,
            sentry: SentryLoggingConfig::from_env(),
        })
    }
}

/// Guards that must be held for active loggers
#[derive(Default)]
pub struct LoggingGuards {
    _sentry: Option<::sentry::ClientInitGuard>,
}

#[derive(Debug, Error)]
pub enum LoggingInitError {
    #[error("failed to install global logging subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

pub fn init_logging(config: LoggingConfig) -> Result<LoggingGuards, LoggingInitError> {
    let mut guards = LoggingGuards::default();

    let filter_layer = filter_layer(config.format.allow_noisy);

    let mut sentry = None;

    if let Some((sentry_layer, client_init_guard)) = sentry_layer(config.sentry) {
        guards._sentry = Some(client_init_guard);
        sentry = Some(sentry_layer);
    }

    tracing_subscriber::registry()
        .with(fmt_layer(config.format))
        .with(sentry)
        .with(filter_layer)
        .try_init()?;

    Ok(guards)
}
