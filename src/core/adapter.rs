//! Adapter trait for log output destinations

use std::sync::Arc;

use super::channel::Channel;
use super::log_level::LogLevel;
use super::logger::Logger;
use crate::adapters::level_filter::LevelFilter;

/// An abstraction of some mechanism for producing log output.
///
/// One adapter instance backs all channels for a given destination. The
/// component that will write to the logs picks a name for its output channel;
/// [`new_channel`](LogAdapter::new_channel) takes that name and returns a
/// low-level [`Channel`], which is wrapped in the standard
/// [`Logger`] facade that the rest of the code interacts with.
///
/// Applications normally only choose which adapter to use; they do not call
/// `new_channel` themselves.
pub trait LogAdapter: Send + Sync {
    /// Obtains a named output channel.
    ///
    /// The name is included in all output for the channel. Channels are meant
    /// to be retained and reused by the components they belong to, so
    /// implementations do not cache them.
    fn new_channel(&self, name: &str) -> Arc<dyn Channel>;
}

impl<A: LogAdapter + ?Sized> LogAdapter for Arc<A> {
    fn new_channel(&self, name: &str) -> Arc<dyn Channel> {
        (**self).new_channel(name)
    }
}

/// Composition methods available on every [`LogAdapter`].
pub trait LogAdapterExt: LogAdapter + Sized + 'static {
    /// Disables output below `minimum_level`.
    ///
    /// Messages for a lower level are discarded immediately; all others are
    /// forwarded to the wrapped adapter, which may have filtering rules of
    /// its own. Both must pass; the thresholds are never merged.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_facade::{logs, LogAdapterExt, LogLevel};
    ///
    /// // Writes all messages, including Debug
    /// let unfiltered = logs::to_console();
    ///
    /// // Writes only Warn and Error messages
    /// let filtered = logs::to_console().level(LogLevel::Warn);
    /// ```
    fn level(self, minimum_level: LogLevel) -> LevelFilter {
        LevelFilter::new(self, minimum_level)
    }

    /// Shorthand for [`Logger::with_adapter`].
    fn logger(self, name: impl Into<String>) -> Logger {
        Logger::with_adapter(self, name)
    }
}

impl<A: LogAdapter + 'static> LogAdapterExt for A {}
