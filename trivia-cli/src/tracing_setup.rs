//! Tracing and OpenTelemetry setup for the trivia CLI
//!
//! Usage:
//!   trivia --debug serve              # Debug logging to console
//!   trivia --otel serve               # Export traces to OTLP endpoint (telemetry feature)
//!   RUST_LOG=trivia_server=debug trivia serve
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (default: info)
//!   OTEL_EXPORTER_OTLP_ENDPOINT       # OTLP endpoint (default: http://localhost:4317)
//!   OTEL_SERVICE_NAME                 # Service name (default: trivia)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level when RUST_LOG is unset
    pub debug: bool,
    /// Enable OpenTelemetry OTLP export
    pub otel: bool,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        let default = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

/// Initialize tracing with console output only
fn init_console(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Initialize tracing with OpenTelemetry OTLP export
#[cfg(feature = "telemetry")]
fn init_otel(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "trivia".to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            service_name.clone(),
        )]))
        .build();

    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(provider.tracer("trivia"));

    // Dropping the provider would stop export
    let _ = opentelemetry::global::set_tracer_provider(provider);

    tracing_subscriber::registry()
        .with(config.filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(config.debug)
                .compact(),
        )
        .with(telemetry_layer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(
        endpoint = %endpoint,
        service = %service_name,
        "OpenTelemetry tracing initialized"
    );
    Ok(())
}

/// Flush pending spans
#[cfg(feature = "telemetry")]
pub fn shutdown() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown() {}

/// Initialize tracing, choosing OTLP export when requested and compiled in.
pub fn init(config: &TracingConfig) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if config.otel {
        return init_otel(config);
    }

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("warning: --otel ignored, trivia was built without the telemetry feature");
    }

    init_console(config)
}
