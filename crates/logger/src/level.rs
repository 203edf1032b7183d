use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mask bit for [`LogLevel::Debug`].
pub const LEVEL_MASK_DEBUG: u32 = 1;
/// Mask bit for [`LogLevel::Info`].
pub const LEVEL_MASK_INFO: u32 = 2;
/// Mask bit for [`LogLevel::Warn`].
pub const LEVEL_MASK_WARN: u32 = 4;
/// Mask bit for [`LogLevel::Error`].
pub const LEVEL_MASK_ERROR: u32 = 8;
/// Every level enabled.
pub const LEVEL_MASK_ALL: u32 =
    LEVEL_MASK_DEBUG | LEVEL_MASK_INFO | LEVEL_MASK_WARN | LEVEL_MASK_ERROR;
/// Default mask: everything except debug.
pub const LEVEL_MASK_DEFAULT: u32 = LEVEL_MASK_INFO | LEVEL_MASK_WARN | LEVEL_MASK_ERROR;

/// Severity of a diagnostic message.
///
/// Discriminants match the values embedders pass across the C boundary,
/// starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum LogLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

/// Returned when a string does not name a log level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid log level: {0:?}")]
pub struct ParseLogLevelError(pub String);

impl LogLevel {
    /// All levels, lowest severity first.
    pub fn all() -> &'static [LogLevel] {
        &[Self::Debug, Self::Info, Self::Warn, Self::Error]
    }

    /// Maps a raw level value, `None` if it is not a known level.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Raw level value.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// The bit this level occupies in a level mask.
    pub fn mask(self) -> u32 {
        match self {
            Self::Debug => LEVEL_MASK_DEBUG,
            Self::Info => LEVEL_MASK_INFO,
            Self::Warn => LEVEL_MASK_WARN,
            Self::Error => LEVEL_MASK_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}
