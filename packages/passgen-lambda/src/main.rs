#![forbid(unsafe_code)]

use anyhow::Context;
use lambda_runtime::{LambdaEvent, service_fn};
use passgen_core::{
    config::PasswordConfig,
    gateway::{GatewayRequest, GatewayResponse},
};

use crate::logging::{LoggingConfig, init_logging};

mod logging;

fn main() -> anyhow::Result<()> {
    _ = dotenvy::dotenv();

    let logging_config = LoggingConfig::from_env().context("failed to load logging config")?;
    let _logging_guards = init_logging(logging_config).context("failed to initialize logging")?;

    let config = PasswordConfig::from_env().context("failed to load password config")?;
    tracing::debug!(?config, "loaded password config");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed building the runtime")?
        .block_on(server(config))
}

async fn server(config: PasswordConfig) -> anyhow::Result<()> {
    lambda_runtime::run(service_fn(move |event| handle_event(config, event)))
        .await
        .map_err(|error| anyhow::anyhow!(error))
}

#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
async fn handle_event(
    config: PasswordConfig,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, lambda_runtime::Error> {
    Ok(passgen_core::handle(&config, &event.payload))
}
