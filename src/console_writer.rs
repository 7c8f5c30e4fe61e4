use std::io::{self, Write};

use chrono::Local;

use crate::console_sink::ConsoleSink;

/// Console sink writing timestamped, prefixed lines to an owned stream.
///
/// Every line is rendered as `<timestamp> <prefix> <line>`, where the
/// timestamp is local time at microsecond resolution, for example
/// `2026/08/06 14:03:21.042817`. Write failures are discarded: the
/// console is assumed not to fail observably.
pub struct ConsoleWriter<W: Write = io::Stdout> {
    prefix: String,
    out: W,
}

impl ConsoleWriter {
    /// Creates a console sink bound to standard output, with `prefix`
    /// followed by a separating space prepended to every line.
    #[must_use]
    pub fn stdout(prefix: &str) -> Self {
        Self::new(prefix, io::stdout())
    }
}

impl<W: Write + Send> ConsoleWriter<W> {
    /// Creates a console sink writing to `out`.
    pub fn new(prefix: &str, out: W) -> Self {
        Self {
            prefix: format!("{prefix} "),
            out,
        }
    }
}

impl<W: Write + Send> ConsoleSink for ConsoleWriter<W> {
    fn write_line(&mut self, line: &str) {
        let ts = Local::now().format("%Y/%m/%d %H:%M:%S%.6f");
        let _ = writeln!(self.out, "{ts} {}{line}", self.prefix);
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn prefix_carries_the_separating_space() {
        let writer = ConsoleWriter::new("console", Vec::<u8>::new());
        assert_eq!(writer.prefix(), "console ");
    }

    #[test]
    fn write_line_renders_timestamp_prefix_and_newline() {
        let mut buf = Vec::new();
        {
            let mut writer = ConsoleWriter::new("console", &mut buf);
            writer.write_line("[DEBUG]  test: some value");
        }
        let line = String::from_utf8(buf).expect("console output is utf-8");

        assert!(
            line.ends_with(" console [DEBUG]  test: some value\n"),
            "unexpected line: {line:?}"
        );

        // 2026/08/06 14:03:21.042817
        let (date, rest) = line.split_once(' ').expect("date field");
        let (time, _) = rest.split_once(' ').expect("time field");
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "/");
        assert_eq!(time.len(), 15);
        assert_eq!(&time[8..9], ".");
    }

    #[test]
    fn each_call_writes_exactly_one_line() {
        let mut buf = Vec::new();
        {
            let mut writer = ConsoleWriter::new("app", &mut buf);
            writer.write_line("[NOTICE] first");
            writer.write_line("[WARN]   second");
        }
        let text = String::from_utf8(buf).expect("console output is utf-8");
        assert_eq!(text.lines().count(), 2);
    }
}
