use crate::{
    console_sink::ConsoleSink, console_writer::ConsoleWriter, log_error::LogError,
    log_level::LogLevel, outputs::Outputs, syslog_sink::SyslogSink, unix_syslog::UnixSyslog,
};

/// Leveled logger fanning messages out to the outputs selected at
/// construction time.
///
/// The logger owns its sink handles exclusively for their entire
/// lifetime. Messages below the minimum level are silently suppressed;
/// everything else is written once per enabled output, with identical
/// text on both.
///
/// # Process termination
///
/// Logging at [`LogLevel::Fatal`] terminates the process with a non-zero
/// status after the emission attempts, even when no output is enabled
/// and regardless of whether emission succeeded. See [`Logger::log`].
pub struct Logger {
    outputs: Outputs,
    console: Option<Box<dyn ConsoleSink>>,
    syslog: Option<Box<dyn SyslogSink>>,
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given outputs and log prefix.
    ///
    /// The console output goes to standard output with `prefix` and a
    /// separating space prepended to every line; the syslog output is
    /// tagged `prefix` at daemon facility. The minimum level starts at
    /// [`LogLevel::Notice`] regardless of the requested outputs.
    /// [`Outputs::NONE`] is legal: such a logger reaches no sink.
    ///
    /// # Errors
    /// Returns [`LogError::Connect`] when the syslog bit is set and the
    /// transport cannot be opened; no partially-constructed logger is
    /// returned.
    pub fn new(outputs: Outputs, prefix: &str) -> Result<Self, LogError> {
        let console: Option<Box<dyn ConsoleSink>> = if outputs.console() {
            Some(Box::new(ConsoleWriter::stdout(prefix)))
        } else {
            None
        };
        let syslog: Option<Box<dyn SyslogSink>> = if outputs.syslog() {
            Some(Box::new(UnixSyslog::connect(prefix)?))
        } else {
            None
        };
        Ok(Self::with_sinks(outputs, console, syslog))
    }

    /// Creates a logger from already-built sinks.
    ///
    /// This is the injection seam: substitute sinks go through here and
    /// the logger cannot tell them apart from the real ones built by
    /// [`Logger::new`]. The minimum level starts at
    /// [`LogLevel::Notice`].
    #[must_use]
    pub fn with_sinks(
        outputs: Outputs,
        console: Option<Box<dyn ConsoleSink>>,
        syslog: Option<Box<dyn SyslogSink>>,
    ) -> Self {
        Self {
            outputs,
            console,
            syslog,
            level: LogLevel::Notice,
        }
    }

    /// Sets the minimum level. Messages below it are suppressed.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Returns the current minimum level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Checks if console logging is enabled.
    ///
    /// This is a membership test against the outputs the logger was
    /// built with, not an inspection of the handle.
    #[must_use]
    pub const fn console(&self) -> bool {
        self.outputs.console()
    }

    /// Checks if syslog logging is enabled.
    #[must_use]
    pub const fn syslog(&self) -> bool {
        self.outputs.syslog()
    }

    /// Logs `msg` to all enabled outputs.
    ///
    /// Levels below the minimum return `Ok(())` without reaching any
    /// sink; equal-or-above levels pass. The console line is the
    /// bracketed level tag left-justified to eight characters, a space,
    /// and the message. Syslog receives the same message routed to the
    /// priority matching `level`: debug, info, warning, err and crit for
    /// the named ranks, notice for everything else.
    ///
    /// Logging at [`LogLevel::Fatal`] does not return: once the emission
    /// attempts are done the process terminates with a non-zero status,
    /// whether or not any sink is enabled or succeeded.
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn log(&mut self, level: LogLevel, msg: &str) -> Result<(), LogError> {
        if level < self.level {
            return Ok(());
        }
        if self.outputs.console() {
            if let Some(console) = self.console.as_mut() {
                let tag = format!("[{level}]");
                console.write_line(&format!("{tag:<8} {msg}"));
            }
        }
        let mut result = Ok(());
        if self.outputs.syslog() {
            if let Some(syslog) = self.syslog.as_mut() {
                result = match level {
                    LogLevel::Debug => syslog.debug(msg),
                    LogLevel::Info => syslog.info(msg),
                    LogLevel::Warn => syslog.warning(msg),
                    LogLevel::Error => syslog.err(msg),
                    LogLevel::Fatal => syslog.crit(msg),
                    LogLevel::Notice => syslog.notice(msg),
                };
            }
        }
        if level == LogLevel::Fatal {
            exit_fatal();
        }
        result
    }

    /// Logs `msg` at [`LogLevel::Debug`].
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn debug(&mut self, msg: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, msg)
    }

    /// Logs `msg` at [`LogLevel::Notice`].
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn notice(&mut self, msg: &str) -> Result<(), LogError> {
        self.log(LogLevel::Notice, msg)
    }

    /// Logs `msg` at [`LogLevel::Info`].
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn info(&mut self, msg: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, msg)
    }

    /// Logs `msg` at [`LogLevel::Warn`].
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn warn(&mut self, msg: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warn, msg)
    }

    /// Logs `msg` at [`LogLevel::Error`].
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn error(&mut self, msg: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, msg)
    }

    /// Logs `msg` at [`LogLevel::Fatal`] and terminates the process.
    ///
    /// Never returns; the signature keeps the shape of the other
    /// convenience methods.
    ///
    /// # Errors
    /// Propagates the syslog sink failure, if any.
    pub fn fatal(&mut self, msg: &str) -> Result<(), LogError> {
        self.log(LogLevel::Fatal, msg)
    }

    /// Closes the syslog output, if enabled; otherwise a no-op.
    ///
    /// The console sink owns no releasable resource beyond the stream
    /// itself and is never closed. Each call with syslog enabled closes
    /// the sink exactly once.
    ///
    /// # Errors
    /// Propagates the failure of the syslog close, if any.
    pub fn close(&mut self) -> Result<(), LogError> {
        if self.outputs.syslog() {
            if let Some(syslog) = self.syslog.as_mut() {
                return syslog.close();
            }
        }
        Ok(())
    }
}

/// Terminates the process after a fatal message has been dispatched.
///
/// The single exit point of the logger. It runs unconditionally once a
/// fatal-level message has been offered to the enabled sinks.
fn exit_fatal() -> ! {
    std::process::exit(1);
}
