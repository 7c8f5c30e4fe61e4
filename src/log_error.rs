use std::fmt;

/// Failures surfaced by the logger.
///
/// Construction can fail when the syslog transport cannot be opened;
/// afterwards only syslog writes and closes can fail, surfaced as the
/// return value of the logging and shutdown calls. Console writes report
/// no failure, and suppressing a message below the minimum level is
/// silent success, not an error.
#[derive(Debug)]
pub enum LogError {
    /// Opening the syslog transport failed; no logger was built.
    Connect(syslog::Error),
    /// The syslog transport rejected a write.
    Emit(syslog::Error),
    /// The syslog sink was used after it was closed.
    Closed,
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(e) => write!(f, "opening syslog failed: {e}"),
            Self::Emit(e) => write!(f, "syslog write failed: {e}"),
            Self::Closed => write!(f, "syslog sink already closed"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect(e) | Self::Emit(e) => Some(e),
            Self::Closed => None,
        }
    }
}
