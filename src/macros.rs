//! Logging macros
//!
//! Thin wrappers over the [`Logger`](crate::Logger) write methods that pick
//! the right arity automatically. A bare message goes through the plain
//! (non-substituting) path; parameters are passed through as lazily rendered
//! values, so expensive `Display` implementations only run if a sink
//! actually renders the message.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::{info, logs, Logger};
//!
//! let logger = Logger::with_adapter(logs::to_console(), "app");
//!
//! info!(logger, "server started");
//!
//! let port = 8080;
//! info!(logger, "listening on port {0}", port);
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use rust_log_facade::{log, logs, Logger, LogLevel};
/// # let logger = Logger::with_adapter(logs::none(), "app");
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "code {0}: {1}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr) => {
        $logger.log($level, $message)
    };
    ($logger:expr, $level:expr, $format:expr, $($param:expr),+ $(,)?) => {
        $logger.logv($level, $format, &[$(&$param),+])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::logs;

    #[test]
    fn test_log_macro_arities() {
        let sink = logs::capture();
        let logger = Logger::with_adapter(sink.clone(), "m");

        log!(logger, LogLevel::Info, "plain");
        log!(logger, LogLevel::Info, "one={0}", 1);
        log!(logger, LogLevel::Info, "{0}+{1}={2}", 1, 2, 3);

        assert!(sink.has_message_with_text(LogLevel::Info, "plain"));
        assert!(sink.has_message_with_text(LogLevel::Info, "one=1"));
        assert!(sink.has_message_with_text(LogLevel::Info, "1+2=3"));
    }

    #[test]
    fn test_level_macros() {
        let sink = logs::capture();
        let logger = Logger::with_adapter(sink.clone(), "m");

        debug!(logger, "d");
        info!(logger, "i={0}", 1);
        warn!(logger, "w");
        error!(logger, "e={0}", "x");

        assert!(sink.has_message_with_text(LogLevel::Debug, "d"));
        assert!(sink.has_message_with_text(LogLevel::Info, "i=1"));
        assert!(sink.has_message_with_text(LogLevel::Warn, "w"));
        assert!(sink.has_message_with_text(LogLevel::Error, "e=x"));
    }

    #[test]
    fn test_bare_message_is_not_substituted() {
        let sink = logs::capture();
        let logger = Logger::with_adapter(sink.clone(), "m");

        info!(logger, "literal {0} braces");

        assert!(sink.has_message_with_text(LogLevel::Info, "literal {0} braces"));
    }
}
