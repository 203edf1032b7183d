//! Level-mask filtering in front of another sink.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::level::{LEVEL_MASK_DEFAULT, LogLevel};
use crate::sink::{LogRecord, LogSink};

/// Shared level mask. Clones observe and update the same bits.
#[derive(Debug, Clone)]
pub struct LevelMask(Arc<AtomicU32>);

impl LevelMask {
    pub fn new(mask: u32) -> Self {
        Self(Arc::new(AtomicU32::new(mask)))
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Sets the mask. Takes effect on the next record.
    pub fn set(&self, mask: u32) {
        self.0.store(mask, Ordering::Relaxed);
        tracing::debug!(mask, "log level mask updated");
    }

    pub fn allows(&self, level: LogLevel) -> bool {
        self.get() & level.mask() != 0
    }
}

/// Forwards only records whose level bit is set in the mask.
///
/// Filtered records are reported as not handled. The mask can be changed
/// while the sink is installed, either here or through a handle from
/// [`LevelFilter::mask_handle`].
#[derive(Debug)]
pub struct LevelFilter<S> {
    inner: S,
    mask: LevelMask,
}

impl<S: LogSink> LevelFilter<S> {
    pub fn new(inner: S, mask: u32) -> Self {
        Self {
            inner,
            mask: LevelMask::new(mask),
        }
    }

    /// Filter with [`LEVEL_MASK_DEFAULT`] (debug suppressed).
    pub fn with_default_mask(inner: S) -> Self {
        Self::new(inner, LEVEL_MASK_DEFAULT)
    }

    pub fn mask(&self) -> u32 {
        self.mask.get()
    }

    pub fn set_mask(&self, mask: u32) {
        self.mask.set(mask);
    }

    /// A handle that keeps controlling this filter after it has been
    /// type-erased and installed.
    pub fn mask_handle(&self) -> LevelMask {
        self.mask.clone()
    }
}

impl<S: LogSink> LogSink for LevelFilter<S> {
    fn log(&self, record: &LogRecord<'_>) -> bool {
        if !self.mask.allows(record.level()) {
            return false;
        }
        self.inner.log(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;
    use crate::level::{LEVEL_MASK_ALL, LEVEL_MASK_ERROR};
    use crate::sink::from_fn;

    fn counting() -> (impl LogSink, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = {
            let count = Arc::clone(&count);
            from_fn(move |_, _| {
                count.fetch_add(1, Ordering::SeqCst);
                true
            })
        };
        (sink, count)
    }

    fn log(sink: &(impl LogSink + ?Sized), level: LogLevel) -> bool {
        sink.log(&LogRecord::new(level, format_args!("m")))
    }

    #[test]
    fn default_mask_drops_debug() {
        let (inner, count) = counting();
        let filter = LevelFilter::with_default_mask(inner);

        assert!(!log(&filter, LogLevel::Debug));
        assert!(log(&filter, LogLevel::Info));
        assert!(log(&filter, LogLevel::Error));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn mask_change_applies_immediately() {
        let (inner, count) = counting();
        let filter = LevelFilter::new(inner, LEVEL_MASK_ALL);
        assert!(log(&filter, LogLevel::Debug));

        filter.set_mask(LEVEL_MASK_ERROR);
        assert_eq!(filter.mask(), LEVEL_MASK_ERROR);
        assert!(!log(&filter, LogLevel::Warn));
        assert!(log(&filter, LogLevel::Error));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn mask_handle_controls_installed_filter() {
        let (inner, count) = counting();
        let filter = LevelFilter::new(inner, LEVEL_MASK_ERROR);
        let handle = filter.mask_handle();
        let erased: Arc<dyn LogSink> = Arc::new(filter);

        assert!(!log(&*erased, LogLevel::Warn));
        handle.set(LEVEL_MASK_ALL);
        assert!(log(&*erased, LogLevel::Warn));
        assert!(handle.allows(LogLevel::Debug));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_mask_blocks_everything() {
        let (inner, count) = counting();
        let filter = LevelFilter::new(inner, 0);
        for level in LogLevel::all() {
            assert!(!log(&filter, *level));
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
