//! In-memory sink that keeps the most recent records.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::level::LogLevel;
use crate::sink::{LogRecord, LogSink};

/// Default number of entries kept by a [`MemorySink`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// An owned copy of a record captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEntry {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub level: LogLevel,
    pub message: String,
}

/// Fixed-capacity circular buffer.
///
/// When full, the oldest element is evicted on each push. Iteration order
/// is oldest to newest.
#[derive(Debug, Clone)]
struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a value, returning `true` if an old entry was evicted.
    fn push(&mut self, value: T) -> bool {
        let evicted = self.buf.len() == self.capacity;
        if evicted {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
        evicted
    }
}

struct State {
    entries: RingBuffer<CapturedEntry>,
    dropped: u64,
}

/// Sink that captures records into a bounded buffer.
///
/// Every record is accepted; once `capacity` entries are held the oldest
/// one is evicted and counted in [`MemorySink::dropped`].
pub struct MemorySink {
    state: Mutex<State>,
}

impl MemorySink {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "MemorySink capacity must be > 0");
        Self {
            state: Mutex::new(State {
                entries: RingBuffer::new(capacity),
                dropped: 0,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copies of the buffered entries, oldest first.
    pub fn entries(&self) -> Vec<CapturedEntry> {
        self.lock().entries.buf.iter().cloned().collect()
    }

    /// Removes and returns the buffered entries, oldest first.
    pub fn drain(&self) -> Vec<CapturedEntry> {
        self.lock().entries.buf.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().entries.capacity
    }

    /// Number of entries evicted to make room since creation or the last
    /// [`MemorySink::clear`].
    pub fn dropped(&self) -> u64 {
        self.lock().dropped
    }

    /// Empties the buffer and resets the dropped count.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.buf.clear();
        state.dropped = 0;
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("MemorySink")
            .field("len", &state.entries.buf.len())
            .field("capacity", &state.entries.capacity)
            .field("dropped", &state.dropped)
            .finish()
    }
}

impl LogSink for MemorySink {
    fn log(&self, record: &LogRecord<'_>) -> bool {
        let entry = CapturedEntry {
            timestamp_ms: now_ms(),
            level: record.level(),
            message: record.message().into_owned(),
        };
        let mut state = self.lock();
        if state.entries.push(entry) {
            state.dropped += 1;
        }
        true
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
