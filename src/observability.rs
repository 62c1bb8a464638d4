use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `observability.log_level`. Output is JSON lines when
/// `observability.json` is set or `ENVIRONMENT=production`, pretty otherwise.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    config: &ObservabilityConfig,
) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)?,
    };

    let json = config.json || std::env::var("ENVIRONMENT").is_ok_and(|env| env == "production");

    let output: Box<dyn Layer<Registry> + Send + Sync> = if json {
        fmt::layer().json().with_current_span(true).boxed()
    } else {
        fmt::layer().with_target(true).with_line_number(true).boxed()
    };

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .try_init()?;

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        json,
        "Logging initialized"
    );

    Ok(())
}
