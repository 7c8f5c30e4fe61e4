//! fanlog is a minimal leveled logging facade: one [`Logger`] fans
//! formatted messages out to the outputs selected at construction time
//! (the console stream and the OS syslog service), filtering by severity.
//!
//! Each output sits behind its own capability trait, so substitutes can
//! be injected in place of the real sinks and the logger cannot tell the
//! difference. Messages below the configured minimum level are silently
//! suppressed; everything else is written once per enabled output, with
//! identical text on both.
//!
//! # Fatal messages terminate the process
//!
//! Logging at [`LogLevel::Fatal`] exits the process with a non-zero
//! status after the emission attempts, even when no output is enabled
//! and regardless of whether emission succeeded. See [`Logger::log`].

/// Capability trait of the console output.
pub mod console_sink;
/// Console sink writing timestamped, prefixed lines to standard output.
pub mod console_writer;
/// Failures surfaced by construction, emission, and shutdown.
pub mod log_error;
/// Severity ranks, their ordering, and string mappings.
pub mod log_level;
/// Format-and-forward convenience macros.
pub mod log_macros;
/// The logger itself: filtering, dispatch, and lifecycle.
pub mod logger;
/// Flag set selecting which outputs a logger writes to.
pub mod outputs;
/// Capability trait of the syslog output.
pub mod syslog_sink;
/// Syslog sink backed by the local syslog socket.
pub mod unix_syslog;

pub use console_sink::ConsoleSink;
pub use console_writer::ConsoleWriter;
pub use log_error::LogError;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use outputs::Outputs;
pub use syslog_sink::SyslogSink;
pub use unix_syslog::UnixSyslog;
