//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use tracing::LogFormat;

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
