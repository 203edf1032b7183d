//! Error types for logger configuration.

/// Errors produced while loading or applying a [`crate::LoggerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level mask {0:#x} has bits outside the known levels")]
    InvalidMask(u32),

    #[error("memory sink capacity must be greater than zero")]
    InvalidCapacity,
}
