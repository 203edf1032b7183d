//! JSON configuration for choosing and installing a sink.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::LoggerError;
use crate::buffer::{DEFAULT_CAPACITY, MemorySink};
use crate::filter::{LevelFilter, LevelMask};
use crate::level::{LEVEL_MASK_ALL, LEVEL_MASK_DEFAULT};
use crate::registry::LoggerRegistry;
use crate::sink::LogSink;
use crate::tracing_sink::TracingSink;

/// Which sink a [`LoggerConfig`] installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Keep the default no-op sink.
    #[default]
    None,
    Tracing,
    Memory,
}

/// Logger settings, typically embedded in the host application's settings
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerConfig {
    pub sink: SinkKind,
    pub level_mask: u32,
    /// Only used by [`SinkKind::Memory`].
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::None,
            level_mask: LEVEL_MASK_DEFAULT,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, LoggerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<(), LoggerError> {
        if self.level_mask & !LEVEL_MASK_ALL != 0 {
            return Err(LoggerError::InvalidMask(self.level_mask));
        }
        if self.sink == SinkKind::Memory && self.capacity == 0 {
            return Err(LoggerError::InvalidCapacity);
        }
        Ok(())
    }

    /// Builds the configured sink. `None` means the default sink.
    ///
    /// Every built sink sits behind a [`LevelFilter`] so its mask can be
    /// changed after installation through [`BuiltSink::mask`].
    pub fn build(&self) -> Result<Option<BuiltSink>, LoggerError> {
        self.validate()?;
        let built = match self.sink {
            SinkKind::None => return Ok(None),
            SinkKind::Tracing => {
                let filter = LevelFilter::new(TracingSink, self.level_mask);
                BuiltSink::new(filter.mask_handle(), Arc::new(filter), None)
            }
            SinkKind::Memory => {
                let memory = Arc::new(MemorySink::new(self.capacity));
                let filter = LevelFilter::new(Arc::clone(&memory), self.level_mask);
                BuiltSink::new(filter.mask_handle(), Arc::new(filter), Some(memory))
            }
        };
        Ok(Some(built))
    }

    /// Validates, builds and installs the sink on `registry`.
    ///
    /// Returns the installed sink's handle, or `None` when the default sink
    /// was restored.
    pub fn apply(&self, registry: &LoggerRegistry) -> Result<Option<BuiltSink>, LoggerError> {
        let built = self.build()?;
        tracing::info!(sink = ?self.sink, mask = self.level_mask, "applying logger config");
        registry.set_logger(built.as_ref().map(BuiltSink::sink));
        Ok(built)
    }
}

/// A sink built from a [`LoggerConfig`], with typed access to the parts
/// that stay adjustable once it is installed.
#[derive(Clone)]
pub struct BuiltSink {
    sink: Arc<dyn LogSink>,
    mask: LevelMask,
    memory: Option<Arc<MemorySink>>,
}

impl BuiltSink {
    fn new(mask: LevelMask, sink: Arc<dyn LogSink>, memory: Option<Arc<MemorySink>>) -> Self {
        Self { sink, mask, memory }
    }

    /// The type-erased sink, ready for [`LoggerRegistry::set_logger`].
    pub fn sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink)
    }

    /// The level mask in front of the sink.
    pub fn mask(&self) -> &LevelMask {
        &self.mask
    }

    /// The capture buffer, for [`SinkKind::Memory`].
    pub fn memory(&self) -> Option<&Arc<MemorySink>> {
        self.memory.as_ref()
    }
}

impl std::fmt::Debug for BuiltSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltSink")
            .field("mask", &self.mask.get())
            .field("memory", &self.memory)
            .finish()
    }
}
