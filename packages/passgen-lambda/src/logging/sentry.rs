use sentry_tracing::SentryLayer;
use tracing::{Level, Subscriber};
use tracing_subscriber::registry::LookupSpan;

/// Configuration for sentry logging
#[derive(Default)]
pub struct SentryLoggingConfig {
    pub dsn: Option<String>,
}

impl SentryLoggingConfig {
    pub fn from_env() -> Self {
        let dsn = std::env::var("SENTRY_DSN")
            .ok()
            .or(std::env::var("PASSGEN_SENTRY_DSN").ok());

        Self { dsn }
    }
}

pub fn sentry_layer<S>(
    config: SentryLoggingConfig,
) -> Option<(SentryLayer<S>, sentry::ClientInitGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let dsn = config.dsn?;
    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        ..Default::default()
    };
    let client_init_guard = sentry::init((dsn, options));

    let sentry_layer = sentry_tracing::layer()
        .event_filter(|event| match event.level() {
            &Level::ERROR => sentry_tracing::EventFilter::Event,
            &Level::WARN | &Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
            &Level::DEBUG | &Level::TRACE => sentry_tracing::EventFilter::Ignore,
        })
        .enable_span_attributes();

    Some((sentry_layer, client_init_guard))
}
