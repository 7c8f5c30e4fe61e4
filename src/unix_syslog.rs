use syslog::{Facility, Formatter3164, LoggerBackend};

use crate::{log_error::LogError, syslog_sink::SyslogSink};

type Transport = syslog::Logger<LoggerBackend, Formatter3164>;

/// Syslog sink backed by the local syslog socket.
///
/// Messages are tagged with the process name given at connection time
/// and carry the daemon facility; the per-message priority comes from
/// the emit method used.
pub struct UnixSyslog {
    transport: Option<Transport>,
}

impl UnixSyslog {
    /// Opens a connection to the local syslog socket, tagged `prefix`.
    ///
    /// # Errors
    /// Returns [`LogError::Connect`] when the transport is unavailable.
    pub fn connect(prefix: &str) -> Result<Self, LogError> {
        let formatter = Formatter3164 {
            facility: Facility::LOG_DAEMON,
            hostname: None,
            process: prefix.to_string(),
            pid: std::process::id(),
        };
        let transport = syslog::unix(formatter).map_err(LogError::Connect)?;
        Ok(Self {
            transport: Some(transport),
        })
    }

    fn transport(&mut self) -> Result<&mut Transport, LogError> {
        self.transport.as_mut().ok_or(LogError::Closed)
    }
}

impl SyslogSink for UnixSyslog {
    fn debug(&mut self, msg: &str) -> Result<(), LogError> {
        self.transport()?.debug(msg).map_err(LogError::Emit)
    }

    fn notice(&mut self, msg: &str) -> Result<(), LogError> {
        self.transport()?.notice(msg).map_err(LogError::Emit)
    }

    fn info(&mut self, msg: &str) -> Result<(), LogError> {
        self.transport()?.info(msg).map_err(LogError::Emit)
    }

    fn warning(&mut self, msg: &str) -> Result<(), LogError> {
        self.transport()?.warning(msg).map_err(LogError::Emit)
    }

    fn err(&mut self, msg: &str) -> Result<(), LogError> {
        self.transport()?.err(msg).map_err(LogError::Emit)
    }

    fn crit(&mut self, msg: &str) -> Result<(), LogError> {
        self.transport()?.crit(msg).map_err(LogError::Emit)
    }

    fn close(&mut self) -> Result<(), LogError> {
        // Dropping the transport releases the socket; closing twice is a no-op.
        self.transport = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitting_after_close_reports_closed() {
        let mut sink = UnixSyslog { transport: None };
        assert!(matches!(sink.notice("late"), Err(LogError::Closed)));
        assert!(matches!(sink.err("late"), Err(LogError::Closed)));
    }

    #[test]
    fn closing_twice_is_a_noop() {
        let mut sink = UnixSyslog { transport: None };
        assert!(sink.close().is_ok());
        assert!(sink.close().is_ok());
    }
}
