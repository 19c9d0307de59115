//! The no-op adapter

use std::fmt;
use std::sync::Arc;

use crate::core::{Channel, LogAdapter, LogLevel};

/// Discards all output; `is_enabled` is false for every level.
///
/// All names share one channel, since there is nothing name-specific to do.
pub struct NullAdapter {
    channel: Arc<dyn Channel>,
}

impl NullAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            channel: Arc::new(NullChannel),
        }
    }
}

impl Default for NullAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAdapter for NullAdapter {
    fn new_channel(&self, _name: &str) -> Arc<dyn Channel> {
        Arc::clone(&self.channel)
    }
}

struct NullChannel;

impl Channel for NullChannel {
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _level: LogLevel, _message: &dyn fmt::Display) {}

    fn log1(&self, _level: LogLevel, _format: &str, _param: &dyn fmt::Display) {}

    fn log2(
        &self,
        _level: LogLevel,
        _format: &str,
        _param1: &dyn fmt::Display,
        _param2: &dyn fmt::Display,
    ) {
    }

    fn logv(&self, _level: LogLevel, _format: &str, _params: &[&dyn fmt::Display]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_disabled() {
        let adapter = NullAdapter::new();
        let channel = adapter.new_channel("anything");
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::None,
        ] {
            assert!(!channel.is_enabled(level));
        }
    }

    #[test]
    fn test_channel_is_shared() {
        let adapter = NullAdapter::new();
        let a = adapter.new_channel("a");
        let b = adapter.new_channel("b");
        assert!(Arc::ptr_eq(&a, &b));
    }
}
