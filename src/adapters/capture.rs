//! In-memory capture sink for test assertions

use parking_lot::Mutex;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

use crate::core::format::format_message;
use crate::core::{Channel, LogAdapter, LogLevel};

/// A captured log message with its fully substituted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedMessage {
    logger_name: String,
    level: LogLevel,
    text: String,
}

impl CapturedMessage {
    /// The name of the logger that produced the message.
    #[must_use]
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// The log level of the message.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The text of the message, after any parameters have been substituted.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CapturedMessage {
    /// Summarizes the message as `"[name] LEVEL: text"`; the name segment is
    /// omitted entirely when the logger name is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.logger_name.is_empty() {
            write!(f, "{}: {}", self.level.uppercase(), self.text)
        } else {
            write!(
                f,
                "[{}] {}: {}",
                self.logger_name,
                self.level.uppercase(),
                self.text
            )
        }
    }
}

/// Accumulates every message delivered to it, for later inspection.
///
/// Mainly intended for testing: configure the code under test with this
/// adapter, then assert on the captured output. All messages are captured
/// regardless of level; to test filtering, wrap the sink with
/// [`LogAdapterExt::level`](crate::core::LogAdapterExt::level) and hand the
/// filtered adapter to the code under test.
///
/// One lock guards the message list across all channels spawned from the
/// same sink, so cross-channel ordering is globally serialized.
///
/// # Example
///
/// ```
/// use rust_log_facade::{logs, Logger};
///
/// let sink = logs::capture();
/// let logger = Logger::with_adapter(sink.clone(), "svc");
/// logger.info("started");
/// assert_eq!(sink.message_strings(), vec!["[svc] INFO: started"]);
/// ```
pub struct LogCapture {
    messages: Arc<Mutex<Vec<CapturedMessage>>>,
}

impl LogCapture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a snapshot of all captured messages, in capture order.
    #[must_use]
    pub fn messages(&self) -> Vec<CapturedMessage> {
        self.messages.lock().clone()
    }

    /// Returns all captured messages rendered as `"[name] LEVEL: text"`
    /// lines, in capture order.
    #[must_use]
    pub fn message_strings(&self) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .map(|message| message.to_string())
            .collect()
    }

    /// Tests whether any captured message at `level` exactly matches `text`.
    #[must_use]
    pub fn has_message_with_text(&self, level: LogLevel, text: &str) -> bool {
        self.messages
            .lock()
            .iter()
            .any(|message| message.level == level && message.text == text)
    }

    /// Tests whether any captured message at `level` matches `pattern`.
    ///
    /// The pattern is searched anywhere in the text, not anchored to the
    /// whole message. An invalid pattern matches nothing.
    #[must_use]
    pub fn has_message_with_regex(&self, level: LogLevel, pattern: &str) -> bool {
        match Regex::new(pattern) {
            Ok(re) => self
                .messages
                .lock()
                .iter()
                .any(|message| message.level == level && re.is_match(&message.text)),
            Err(_) => false,
        }
    }
}

impl Default for LogCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogCapture {
    /// All captured lines joined with `\n`, in capture order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message_strings().join("\n"))
    }
}

impl LogAdapter for LogCapture {
    fn new_channel(&self, name: &str) -> Arc<dyn Channel> {
        Arc::new(CaptureChannel {
            messages: Arc::clone(&self.messages),
            name: name.to_string(),
        })
    }
}

struct CaptureChannel {
    messages: Arc<Mutex<Vec<CapturedMessage>>>,
    name: String,
}

impl CaptureChannel {
    fn add_message(&self, level: LogLevel, text: String) {
        self.messages.lock().push(CapturedMessage {
            logger_name: self.name.clone(),
            level,
            text,
        });
    }
}

impl Channel for CaptureChannel {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        self.add_message(level, message.to_string());
    }

    fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]) {
        self.add_message(level, format_message(format, params));
    }
}
