//! The public logging facade

use std::fmt;
use std::sync::Arc;

use super::adapter::LogAdapter;
use super::channel::Channel;
use super::log_level::LogLevel;

/// A named logger that delegates to an underlying output implementation.
///
/// Code that generates log output sends it through this type; what happens to
/// the output depends on the [`LogAdapter`] the logger was created with.
///
/// There are output methods for each level in [`LogLevel`]. Each comes in
/// four arities mirroring the [`Channel`] contract: a plain message
/// (`info`), a format string with one parameter (`info1`), two parameters
/// (`info2`), and a parameter slice (`infov`). Format strings use positional
/// `{0}`/`{1}` placeholders.
///
/// `Logger` is cheaply cloneable; clones share the same channel.
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    adapter: Arc<dyn LogAdapter>,
    channel: Arc<dyn Channel>,
}

impl Logger {
    /// Creates a named logger using the given adapter.
    ///
    /// Obtains one channel from the adapter and retains it for the logger's
    /// lifetime; the adapter is not queried again by this instance.
    #[must_use]
    pub fn with_adapter(adapter: impl LogAdapter + 'static, name: impl Into<String>) -> Self {
        let adapter: Arc<dyn LogAdapter> = Arc::new(adapter);
        let name: String = name.into();
        let channel = adapter.new_channel(&name);
        Self {
            name: name.into(),
            adapter,
            channel,
        }
    }

    /// The name this logger was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derives a logger named `parent.suffix` with a fresh channel from the
    /// same adapter.
    ///
    /// An empty suffix returns this logger unchanged: the result shares the
    /// parent's channel and no new channel is created.
    #[must_use]
    pub fn sub_logger(&self, name_suffix: &str) -> Logger {
        if name_suffix.is_empty() {
            return self.clone();
        }
        let sub_name: Arc<str> = format!("{}.{}", self.name, name_suffix).into();
        let channel = self.adapter.new_channel(&sub_name);
        Logger {
            name: sub_name,
            adapter: Arc::clone(&self.adapter),
            channel,
        }
    }

    /// Tests whether output for `level` is at least potentially visible.
    ///
    /// Level filtering is normally set up once in the logging configuration
    /// and callers simply invoke the output methods. For a message that is
    /// particularly expensive to compute, a false result here means the work
    /// can be skipped entirely; alternatively, see
    /// [`defer`](crate::core::lazy::defer) for building the expensive part
    /// lazily.
    #[must_use]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.channel.is_enabled(level)
    }

    /// Writes a plain message at an explicit level. Braces in `message` are
    /// literal text; no substitution is applied.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.channel.log(level, &message);
    }

    pub fn log1(&self, level: LogLevel, format: &str, param: impl fmt::Display) {
        self.channel.log1(level, format, &param);
    }

    pub fn log2(
        &self,
        level: LogLevel,
        format: &str,
        param1: impl fmt::Display,
        param2: impl fmt::Display,
    ) {
        self.channel.log2(level, format, &param1, &param2);
    }

    pub fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]) {
        self.channel.logv(level, format, params);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.channel.log(LogLevel::Debug, &message);
    }

    #[inline]
    pub fn debug1(&self, format: &str, param: impl fmt::Display) {
        self.channel.log1(LogLevel::Debug, format, &param);
    }

    #[inline]
    pub fn debug2(&self, format: &str, param1: impl fmt::Display, param2: impl fmt::Display) {
        self.channel.log2(LogLevel::Debug, format, &param1, &param2);
    }

    #[inline]
    pub fn debugv(&self, format: &str, params: &[&dyn fmt::Display]) {
        self.channel.logv(LogLevel::Debug, format, params);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.channel.log(LogLevel::Info, &message);
    }

    #[inline]
    pub fn info1(&self, format: &str, param: impl fmt::Display) {
        self.channel.log1(LogLevel::Info, format, &param);
    }

    #[inline]
    pub fn info2(&self, format: &str, param1: impl fmt::Display, param2: impl fmt::Display) {
        self.channel.log2(LogLevel::Info, format, &param1, &param2);
    }

    #[inline]
    pub fn infov(&self, format: &str, params: &[&dyn fmt::Display]) {
        self.channel.logv(LogLevel::Info, format, params);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.channel.log(LogLevel::Warn, &message);
    }

    #[inline]
    pub fn warn1(&self, format: &str, param: impl fmt::Display) {
        self.channel.log1(LogLevel::Warn, format, &param);
    }

    #[inline]
    pub fn warn2(&self, format: &str, param1: impl fmt::Display, param2: impl fmt::Display) {
        self.channel.log2(LogLevel::Warn, format, &param1, &param2);
    }

    #[inline]
    pub fn warnv(&self, format: &str, params: &[&dyn fmt::Display]) {
        self.channel.logv(LogLevel::Warn, format, params);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.channel.log(LogLevel::Error, &message);
    }

    #[inline]
    pub fn error1(&self, format: &str, param: impl fmt::Display) {
        self.channel.log1(LogLevel::Error, format, &param);
    }

    #[inline]
    pub fn error2(&self, format: &str, param1: impl fmt::Display, param2: impl fmt::Display) {
        self.channel.log2(LogLevel::Error, format, &param1, &param2);
    }

    #[inline]
    pub fn errorv(&self, format: &str, params: &[&dyn fmt::Display]) {
        self.channel.logv(LogLevel::Error, format, params);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}
