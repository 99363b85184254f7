//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Output shape of the log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line (servers).
    Json,
    /// Compact human-readable lines (interactive tools).
    Compact,
}

/// Initialize tracing/logging for the process, writing to stderr.
///
/// The filter comes from `RUST_LOG`, falling back to `default_directive()`.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(format)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Compact => builder.compact().without_time().try_init(),
    };
}

/// Servers log at `info`; the interactive menu only surfaces warnings so log
/// lines do not interleave with the menu.
pub fn default_directive(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Json => "info",
        LogFormat::Compact => "warn",
    }
}
