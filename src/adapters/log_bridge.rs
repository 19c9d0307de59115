//! Bridge to the `log` crate facade

use std::fmt;
use std::sync::Arc;

use crate::core::format::format_message;
use crate::core::{Channel, LogAdapter, LogLevel};

/// Routes all output to whatever `log` backend the embedding application has
/// installed (env_logger, fern, systemd journal, ...).
///
/// Channel names become `log` targets, so per-target filtering configured in
/// that backend applies unchanged. Enablement is checked against the backend
/// before any message text is substituted; a level the backend filters out
/// costs nothing beyond the check.
pub struct LogCrateAdapter;

impl LogCrateAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogCrateAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAdapter for LogCrateAdapter {
    fn new_channel(&self, name: &str) -> Arc<dyn Channel> {
        Arc::new(LogCrateChannel {
            target: name.to_string(),
        })
    }
}

struct LogCrateChannel {
    target: String,
}

impl LogCrateChannel {
    fn enabled(&self, level: LogLevel) -> Option<log::Level> {
        let level = level.to_log_crate()?;
        if log::log_enabled!(target: self.target.as_str(), level) {
            Some(level)
        } else {
            None
        }
    }
}

impl Channel for LogCrateChannel {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.enabled(level).is_some()
    }

    fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        if let Some(level) = self.enabled(level) {
            log::log!(target: self.target.as_str(), level, "{}", message);
        }
    }

    fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]) {
        if let Some(level) = self.enabled(level) {
            log::log!(
                target: self.target.as_str(),
                level,
                "{}",
                format_message(format, params)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // With no `log` backend installed the global max level is Off, so the
    // bridge must report everything disabled. Backend round-trips live in
    // tests/log_bridge_tests.rs, which owns the process-global logger.
    #[test]
    fn test_disabled_without_backend() {
        let adapter = LogCrateAdapter::new();
        let channel = adapter.new_channel("bridge.test.nobackend");
        assert!(!channel.is_enabled(LogLevel::None));
    }
}
