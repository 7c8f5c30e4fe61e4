use std::fmt;

/// Defines the severity levels for log messages.
///
/// Variants are declared from least to most severe, so the derived
/// ordering is `Debug < Notice < Info < Warn < Error < Fatal`. This
/// ordering is what the logger compares against its minimum level when
/// deciding whether a message is emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug,
    /// Designates normal but significant conditions. This is the default rank.
    Notice,
    /// Designates informational messages that highlight the progress of the application.
    Info,
    /// Designates potentially harmful situations.
    Warn,
    /// Designates error events that might still allow the application to continue running.
    Error,
    /// Designates severe errors after which the process terminates.
    Fatal,
}

impl LogLevel {
    /// Parses a level name, ignoring case and surrounding whitespace.
    ///
    /// Exactly `DEBUG`, `INFO`, `WARN`, `ERROR` and `FATAL` map to their
    /// ranks. Every other input, including `NOTICE` itself, the empty
    /// string, and garbage, maps to [`LogLevel::Notice`]; no error is
    /// ever signaled.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "INFO" => Self::Info,
            "WARN" => Self::Warn,
            "ERROR" => Self::Error,
            "FATAL" => Self::Fatal,
            _ => Self::Notice,
        }
    }

    /// Returns the uppercase display name of the rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_debug_to_fatal() {
        assert!(LogLevel::Debug < LogLevel::Notice);
        assert!(LogLevel::Notice < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn from_str_lossy_matches_named_ranks() {
        assert_eq!(LogLevel::from_str_lossy("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_lossy("INFO"), LogLevel::Info);
        assert_eq!(LogLevel::from_str_lossy("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_lossy("ERROR"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_lossy("FATAL"), LogLevel::Fatal);
    }

    #[test]
    fn from_str_lossy_ignores_case_and_whitespace() {
        assert_eq!(LogLevel::from_str_lossy(" debug "), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_lossy("Debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_lossy("\terror\n"), LogLevel::Error);
    }

    #[test]
    fn from_str_lossy_defaults_to_notice() {
        assert_eq!(LogLevel::from_str_lossy("NOTICE"), LogLevel::Notice);
        assert_eq!(LogLevel::from_str_lossy("notice"), LogLevel::Notice);
        assert_eq!(LogLevel::from_str_lossy(""), LogLevel::Notice);
        assert_eq!(LogLevel::from_str_lossy("garbage"), LogLevel::Notice);
    }

    #[test]
    fn as_str_names_every_rank() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Notice.as_str(), "NOTICE");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
        assert_eq!(LogLevel::Fatal.as_str(), "FATAL");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert_eq!(format!("[{}]", LogLevel::Notice), "[NOTICE]");
    }
}
