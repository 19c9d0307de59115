//! Channel trait: the low-level sink contract behind every logger

use std::fmt;

use super::log_level::LogLevel;

/// The underlying sink used by a [`Logger`](super::logger::Logger) instance.
///
/// Code that generates log output does not interact with `Channel` directly;
/// implementations are produced by whatever
/// [`LogAdapter`](super::adapter::LogAdapter) is in use. The logger sends
/// each message here with its [`LogLevel`]. If output for that level is known
/// to be completely disabled, the channel should return immediately and do no
/// other processing.
///
/// Parameters are `&dyn fmt::Display` rather than pre-rendered strings so
/// that an implementation delegating to another logging framework can decide
/// for itself whether to pay for string interpolation, since filtering rules
/// may live elsewhere in that framework. The write operations come in four
/// arities so the common zero/one/two-parameter calls never allocate a
/// parameter vector.
pub trait Channel: Send + Sync {
    /// Tests whether output for `level` is at least potentially visible.
    ///
    /// Must return false only when this channel will definitely discard that
    /// level. Callers may use a false result to skip expensive message
    /// construction.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Writes a plain message. No placeholder substitution is applied;
    /// braces in `message` are literal text.
    fn log(&self, level: LogLevel, message: &dyn fmt::Display);

    /// Writes a message with a single positional parameter.
    fn log1(&self, level: LogLevel, format: &str, param: &dyn fmt::Display) {
        self.logv(level, format, &[param]);
    }

    /// Writes a message with two positional parameters.
    fn log2(
        &self,
        level: LogLevel,
        format: &str,
        param1: &dyn fmt::Display,
        param2: &dyn fmt::Display,
    ) {
        self.logv(level, format, &[param1, param2]);
    }

    /// Writes a message with any number of positional parameters.
    fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]);
}
