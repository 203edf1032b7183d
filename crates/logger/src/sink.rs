//! The sink trait, the no-op default sink, and the closure adapter.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::level::LogLevel;

/// A single diagnostic message as handed to a [`LogSink`].
///
/// The message is kept as unformatted `fmt::Arguments`; sinks that discard
/// the record never pay for formatting.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    level: LogLevel,
    args: fmt::Arguments<'a>,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, args: fmt::Arguments<'a>) -> Self {
        Self { level, args }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }

    /// The formatted message. Borrowed when the record carries a plain
    /// literal with no arguments.
    pub fn message(&self) -> Cow<'a, str> {
        match self.args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(self.args.to_string()),
        }
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("message", &self.args)
            .finish()
    }
}

/// Destination for diagnostic messages.
///
/// Returns `true` when the record was consumed. The registry forwards this
/// value to the caller of `emit` and never acts on it.
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord<'_>) -> bool;
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn log(&self, record: &LogRecord<'_>) -> bool {
        (**self).log(record)
    }
}

/// Sink installed when nothing else is: discards every record and reports
/// it as not handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSink;

impl LogSink for DefaultSink {
    #[inline]
    fn log(&self, _record: &LogRecord<'_>) -> bool {
        false
    }
}

/// Sink backed by a closure taking the level and formatted message.
pub struct FnSink<F> {
    f: F,
}

impl<F> LogSink for FnSink<F>
where
    F: Fn(LogLevel, &str) -> bool + Send + Sync,
{
    fn log(&self, record: &LogRecord<'_>) -> bool {
        (self.f)(record.level(), &record.message())
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSink")
    }
}

/// Wraps a closure as a [`LogSink`].
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: Fn(LogLevel, &str) -> bool + Send + Sync,
{
    FnSink { f }
}
