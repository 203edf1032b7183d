//! Swappable log sink for the screen capture library.
//!
//! Every diagnostic the library produces goes through a [`LoggerRegistry`]
//! instead of writing to a stream directly. The embedder decides where
//! messages end up by installing a [`LogSink`]; until it does, or after it
//! passes `None`, the [`DefaultSink`] silently discards everything and
//! reports the message as not handled.
//!
//! # Sinks
//!
//! - [`from_fn`] — wrap a closure
//! - [`TracingSink`] — forward into `tracing`
//! - [`MemorySink`] — keep the most recent entries in memory
//! - [`LevelFilter`] — level-mask filter in front of any sink

pub mod buffer;
pub mod config;
pub mod error;
pub mod filter;
pub mod level;
mod macros;
pub mod registry;
pub mod sink;
pub mod tracing_sink;

// Re-export primary types for convenience.
pub use buffer::{CapturedEntry, MemorySink};
pub use config::{BuiltSink, LoggerConfig, SinkKind};
pub use error::LoggerError;
pub use filter::{LevelFilter, LevelMask};
pub use level::{
    LEVEL_MASK_ALL, LEVEL_MASK_DEBUG, LEVEL_MASK_DEFAULT, LEVEL_MASK_ERROR, LEVEL_MASK_INFO,
    LEVEL_MASK_WARN, LogLevel, ParseLogLevelError,
};
pub use registry::{LoggerRegistry, emit, global, set_logger};
pub use sink::{DefaultSink, FnSink, LogRecord, LogSink, from_fn};
pub use tracing_sink::TracingSink;
