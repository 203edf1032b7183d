//! Formatting macros for call sites.
//!
//! Each macro evaluates to the sink's `bool` verdict. Without a
//! `registry = ...;` prefix the process-wide registry is used.

/// Emits a message at an explicit level.
///
/// ```
/// use screencapture_logger::{LogLevel, LoggerRegistry, log_at};
///
/// let registry = LoggerRegistry::new();
/// let handled = log_at!(registry = registry; LogLevel::Warn, "display {} lost", 2);
/// assert!(!handled);
/// ```
#[macro_export]
macro_rules! log_at {
    (registry = $registry:expr; $level:expr, $($arg:tt)+) => {
        $crate::LoggerRegistry::emit(&$registry, $level, ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::emit($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    (registry = $registry:expr; $($arg:tt)+) => {
        $crate::log_at!(registry = $registry; $crate::LogLevel::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    (registry = $registry:expr; $($arg:tt)+) => {
        $crate::log_at!(registry = $registry; $crate::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    (registry = $registry:expr; $($arg:tt)+) => {
        $crate::log_at!(registry = $registry; $crate::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    (registry = $registry:expr; $($arg:tt)+) => {
        $crate::log_at!(registry = $registry; $crate::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::LogLevel::Error, $($arg)+)
    };
}
