//! Subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "gamedex-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to
/// `~/.local/share/zellij/gamedex/gamedex-otlp.json`.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, otherwise `info`. Tracing is optional: if the data
/// directory cannot be created nothing is installed, and only the first
/// successful call in a process takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter_for(config))
        .with(otel_layer)
        .try_init();
}

fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured_level(config)))
}

fn configured_level(config: &Config) -> &str {
    config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        assert_eq!(configured_level(&Config::default()), "info");

        let config = Config {
            trace_level: Some("gamedex=debug".to_string()),
            ..Config::default()
        };
        assert_eq!(configured_level(&config), "gamedex=debug");
    }
}
