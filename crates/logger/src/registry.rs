//! The swappable sink slot and the process-wide instance.
//!
//! A [`LoggerRegistry`] always holds exactly one sink. Passing `None` to
//! [`LoggerRegistry::set_logger`] puts the [`DefaultSink`] back, so callers
//! of [`LoggerRegistry::emit`] never need to check for an empty slot.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::level::LogLevel;
use crate::sink::{DefaultSink, LogRecord, LogSink};

struct Slot {
    sink: Arc<dyn LogSink>,
    is_default: bool,
}

impl Slot {
    fn default_sink() -> Self {
        Self {
            sink: Arc::new(DefaultSink),
            is_default: true,
        }
    }
}

/// Shared handle to the active log sink.
///
/// Clones share the same slot, so a handle given to a subsystem observes
/// every later `set_logger` made through any other clone.
#[derive(Clone)]
pub struct LoggerRegistry {
    slot: Arc<RwLock<Slot>>,
}

impl LoggerRegistry {
    /// Creates a registry holding the [`DefaultSink`].
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot::default_sink())),
        }
    }

    /// Replaces the active sink, or restores the [`DefaultSink`] on `None`.
    pub fn set_logger(&self, sink: Option<Arc<dyn LogSink>>) {
        let next = match sink {
            Some(sink) => Slot {
                sink,
                is_default: false,
            },
            None => Slot::default_sink(),
        };
        let custom = !next.is_default;

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        let was_custom = !slot.is_default;
        *slot = next;
        drop(slot);

        tracing::debug!(was_custom, custom, "log sink replaced");
    }

    /// Sends a record to the active sink and returns its verdict unchanged.
    ///
    /// The slot lock is released before the sink runs; a sink may call
    /// `set_logger` on this registry from inside `log`.
    pub fn emit(&self, level: LogLevel, args: fmt::Arguments<'_>) -> bool {
        let sink = self.sink();
        sink.log(&LogRecord::new(level, args))
    }

    /// Snapshot of the active sink.
    pub fn sink(&self) -> Arc<dyn LogSink> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&slot.sink)
    }

    /// Whether the registry holds its built-in [`DefaultSink`], i.e. no
    /// sink was installed or the last `set_logger` call passed `None`.
    ///
    /// Any sink passed as `Some`, including an explicit `DefaultSink`,
    /// counts as installed and makes this `false`.
    pub fn is_default(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_default
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("is_default", &self.is_default())
            .finish()
    }
}

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry used by the logging macros.
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(LoggerRegistry::new)
}

/// [`LoggerRegistry::set_logger`] on the process-wide registry.
pub fn set_logger(sink: Option<Arc<dyn LogSink>>) {
    global().set_logger(sink);
}

/// [`LoggerRegistry::emit`] on the process-wide registry.
pub fn emit(level: LogLevel, args: fmt::Arguments<'_>) -> bool {
    global().emit(level, args)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::sink::from_fn;

    fn recorder(
        verdict: bool,
    ) -> (Arc<dyn LogSink>, Arc<Mutex<Vec<(LogLevel, String)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            from_fn(move |level, msg| {
                seen.lock().unwrap().push((level, msg.to_string()));
                verdict
            })
        };
        (Arc::new(sink), seen)
    }

    #[test]
    fn new_registry_uses_default_sink() {
        let registry = LoggerRegistry::new();
        assert!(registry.is_default());
        assert!(!registry.emit(LogLevel::Error, format_args!("dropped")));
    }

    #[test]
    fn custom_sink_receives_records() {
        let registry = LoggerRegistry::new();
        let (sink, seen) = recorder(true);
        registry.set_logger(Some(sink));

        assert!(!registry.is_default());
        assert!(registry.emit(LogLevel::Warn, format_args!("msg")));
        assert_eq!(*seen.lock().unwrap(), vec![(LogLevel::Warn, "msg".to_string())]);
    }

    #[test]
    fn sink_verdict_is_forwarded() {
        let registry = LoggerRegistry::new();
        let (sink, _seen) = recorder(false);
        registry.set_logger(Some(sink));
        assert!(!registry.emit(LogLevel::Info, format_args!("ignored")));
    }

    #[test]
    fn none_resets_to_default() {
        let registry = LoggerRegistry::new();
        let (sink, seen) = recorder(true);
        registry.set_logger(Some(sink));
        registry.set_logger(None);

        assert!(registry.is_default());
        assert!(!registry.emit(LogLevel::Error, format_args!("x")));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn explicit_default_sink_counts_as_installed() {
        let registry = LoggerRegistry::new();
        registry.set_logger(Some(Arc::new(DefaultSink)));

        assert!(!registry.is_default());
        assert!(!registry.emit(LogLevel::Warn, format_args!("discarded")));

        registry.set_logger(None);
        assert!(registry.is_default());
    }

    #[test]
    fn reset_on_default_registry_is_harmless() {
        let registry = LoggerRegistry::new();
        registry.set_logger(None);
        registry.set_logger(None);
        assert!(registry.is_default());
    }

    #[test]
    fn later_sink_replaces_earlier() {
        let registry = LoggerRegistry::new();
        let (first, first_seen) = recorder(true);
        let (second, second_seen) = recorder(true);
        registry.set_logger(Some(first));
        registry.set_logger(Some(second));

        registry.emit(LogLevel::Info, format_args!("to second"));
        assert!(first_seen.lock().unwrap().is_empty());
        assert_eq!(second_seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn clones_share_the_slot() {
        let registry = LoggerRegistry::new();
        let handle = registry.clone();
        let (sink, seen) = recorder(true);
        handle.set_logger(Some(sink));

        assert!(registry.emit(LogLevel::Debug, format_args!("via original")));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn sink_may_swap_itself_out() {
        let registry = LoggerRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let sink = {
            let registry = registry.clone();
            let calls = Arc::clone(&calls);
            from_fn(move |_, _| {
                calls.fetch_add(1, Ordering::SeqCst);
                registry.set_logger(None);
                true
            })
        };
        registry.set_logger(Some(Arc::new(sink)));

        assert!(registry.emit(LogLevel::Info, format_args!("once")));
        assert!(!registry.emit(LogLevel::Info, format_args!("twice")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(registry.is_default());
    }

    #[test]
    fn emit_is_visible_across_threads() {
        let registry = LoggerRegistry::new();
        let (sink, seen) = recorder(true);
        registry.set_logger(Some(sink));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.emit(LogLevel::Info, format_args!("t{i}")))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(seen.lock().unwrap().len(), 4);
    }
}
