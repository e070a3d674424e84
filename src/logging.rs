//! Tracing subscriber setup.

use tracing_subscriber::{
    filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter with priority: CLI > env > default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Parse a filter string, rejecting directives `EnvFilter::new` would drop.
pub fn build_filter(filter: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(filter)
}

/// Install the global subscriber. Must be called once, before any logging.
pub fn init_tracing(filter: &str, format: LogFormat) -> Result<(), ParseError> {
    let registry = tracing_subscriber::registry().with(build_filter(filter)?);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
    Ok(())
}
