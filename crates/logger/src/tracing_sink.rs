//! Bridge from the sink registry into `tracing`.

use crate::level::LogLevel;
use crate::sink::{LogRecord, LogSink};

/// Target attached to every forwarded event.
pub const TRACING_TARGET: &str = "screencapture";

/// Re-emits records as `tracing` events at the matching level.
///
/// Whether anything is printed depends on the subscriber the embedder
/// installs; the record always counts as handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord<'_>) -> bool {
        let message = record.args();
        match record.level() {
            LogLevel::Debug => tracing::debug!(target: TRACING_TARGET, "{message}"),
            LogLevel::Info => tracing::info!(target: TRACING_TARGET, "{message}"),
            LogLevel::Warn => tracing::warn!(target: TRACING_TARGET, "{message}"),
            LogLevel::Error => tracing::error!(target: TRACING_TARGET, "{message}"),
        }
        true
    }
}
