use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read for the log filter when `--log` is not given.
pub const LOG_ENV_VAR: &str = "LEDGER_RECORDS_LOG";

/// Initialize tracing with the given `EnvFilter` directive.
///
/// Logs go to stderr so stdout carries only responses. An unparsable filter
/// falls back to "info".
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
