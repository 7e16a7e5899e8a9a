//! Tracing setup: subscriber init plus span and event definitions.

pub mod events;
pub mod spans;

use rapport_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "RAPPORT_LOG";

/// Initialize the tracing subscriber. Logs go to stderr so rendered output
/// on stdout stays clean.
///
/// Respects the `RAPPORT_LOG` environment variable for filtering and falls
/// back to `config.log_level`. Calling it twice is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing_with_filter("debug");
        init_tracing(&ObservabilityConfig::default());
        events::matrix_built("abc", 3, 2);
    }

    #[test]
    fn span_macros_expand() {
        let span = crate::cycle_search_span!(4, 3);
        let _guard = span.enter();
        assert_eq!(spans::names::CYCLE_SEARCH, "rapport.cycles");
    }
}
