//! Format-and-forward convenience macros over [`Logger`](crate::Logger).
//!
//! Each macro formats its arguments exactly once and hands the resulting
//! message to the logger, returning the logger's `Result` unchanged:
//!
//! ```rust,ignore
//! logger_warn!(logger, "disk {} at {}%", disk, pct)?;
//! ```

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($lvl, &__msg)
    }};
}

#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logger_log!($logger, $crate::LogLevel::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! logger_notice {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logger_log!($logger, $crate::LogLevel::Notice, $($arg)*)
    };
}

#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logger_log!($logger, $crate::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! logger_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logger_log!($logger, $crate::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logger_log!($logger, $crate::LogLevel::Error, $($arg)*)
    };
}

/// Formats, logs at fatal level, and therefore never returns.
#[macro_export]
macro_rules! logger_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logger_log!($logger, $crate::LogLevel::Fatal, $($arg)*)
    };
}
