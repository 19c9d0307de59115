//! Line-writer adapter
//!
//! Renders each message as one preformatted line and hands it to a sink
//! function. The factory functions in [`crate::logs`] cover the common
//! sinks: the console, any `io::Write`, or an arbitrary callback.

use parking_lot::Mutex;
use std::fmt;
use std::fmt::Write as _;
use std::io;
use std::io::Write as _;
use std::sync::Arc;

use crate::core::format::format_message;
use crate::core::{Channel, LogAdapter, LogLevel, TimestampFormat};

type LineSink = Arc<dyn Fn(&str) + Send + Sync>;

/// A basic adapter that writes one preformatted line per message.
///
/// Lines have the form `<timestamp> [<name>] LEVEL: <text>`. The timestamp
/// can be reformatted or disabled with the builder methods; the `[<name>] `
/// segment is omitted when the logger name is empty.
pub struct SimpleAdapter {
    sink: LineSink,
    timestamp: Option<TimestampFormat>,
}

impl SimpleAdapter {
    /// Adapter calling `write_line` once per line of output.
    #[must_use]
    pub fn to_method(write_line: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(write_line),
            timestamp: Some(TimestampFormat::default()),
        }
    }

    /// Adapter writing lines to any `io::Write` (a file, a pipe, an
    /// in-memory buffer).
    ///
    /// Write failures are reported to stderr; they never reach the logging
    /// caller.
    #[must_use]
    pub fn to_writer(writer: impl io::Write + Send + 'static) -> Self {
        let writer = Mutex::new(writer);
        Self::to_method(move |line| {
            let mut writer = writer.lock();
            if let Err(e) = writeln!(writer, "{}", line) {
                eprintln!("[LOGGER ERROR] writer sink failed: {}", e);
            }
        })
    }

    /// Adapter writing lines to the standard error stream.
    #[must_use]
    pub fn to_console() -> Self {
        Self::to_method(|line| eprintln!("{}", line))
    }

    /// Set the timestamp format for this adapter
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = Some(format);
        self
    }

    /// Omit the timestamp from every line
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }
}

impl LogAdapter for SimpleAdapter {
    fn new_channel(&self, name: &str) -> Arc<dyn Channel> {
        Arc::new(SimpleChannel {
            sink: Arc::clone(&self.sink),
            name: name.to_string(),
            timestamp: self.timestamp.clone(),
        })
    }
}

struct SimpleChannel {
    sink: LineSink,
    name: String,
    timestamp: Option<TimestampFormat>,
}

impl SimpleChannel {
    fn print(&self, level: LogLevel, text: &str) {
        let mut line = String::new();
        if let Some(format) = &self.timestamp {
            line.push_str(&format.now());
            line.push(' ');
        }
        if !self.name.is_empty() {
            let _ = write!(line, "[{}] ", self.name);
        }
        let _ = write!(line, "{}: {}", level.uppercase(), text);
        (self.sink)(&line);
    }
}

impl Channel for SimpleChannel {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        self.print(level, &message.to_string());
    }

    fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]) {
        self.print(level, &format_message(format, params));
    }
}
