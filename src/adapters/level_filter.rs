//! Level-filter decorator adapter

use std::fmt;
use std::sync::Arc;

use crate::core::{Channel, LogAdapter, LogLevel};

/// Wraps another adapter and discards messages below a fixed threshold.
///
/// Normally created through
/// [`LogAdapterExt::level`](crate::core::LogAdapterExt::level). The
/// threshold is fixed at construction; every channel produced forwards a
/// call only when `enable_level <= level`. The wrapped adapter's own
/// filtering, if any, still applies independently.
pub struct LevelFilter {
    wrapped: Arc<dyn LogAdapter>,
    enable_level: LogLevel,
}

impl LevelFilter {
    #[must_use]
    pub fn new(adapter: impl LogAdapter + 'static, enable_level: LogLevel) -> Self {
        Self {
            wrapped: Arc::new(adapter),
            enable_level,
        }
    }
}

impl LogAdapter for LevelFilter {
    fn new_channel(&self, name: &str) -> Arc<dyn Channel> {
        Arc::new(FilterChannel {
            wrapped: self.wrapped.new_channel(name),
            enable_level: self.enable_level,
        })
    }
}

struct FilterChannel {
    wrapped: Arc<dyn Channel>,
    enable_level: LogLevel,
}

impl Channel for FilterChannel {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.enable_level <= level && self.wrapped.is_enabled(level)
    }

    fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        if self.enable_level <= level {
            self.wrapped.log(level, message);
        }
    }

    fn log1(&self, level: LogLevel, format: &str, param: &dyn fmt::Display) {
        if self.enable_level <= level {
            self.wrapped.log1(level, format, param);
        }
    }

    fn log2(
        &self,
        level: LogLevel,
        format: &str,
        param1: &dyn fmt::Display,
        param2: &dyn fmt::Display,
    ) {
        if self.enable_level <= level {
            self.wrapped.log2(level, format, param1, param2);
        }
    }

    fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]) {
        if self.enable_level <= level {
            self.wrapped.logv(level, format, params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogAdapterExt;
    use crate::logs;

    #[test]
    fn test_threshold_drops_lower_levels() {
        let capture = logs::capture();
        let logger = capture.clone().level(LogLevel::Warn).logger("svc");

        logger.debug("dropped");
        logger.info("dropped");
        logger.warn("kept");
        logger.error("kept");

        let messages = capture.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].level(), LogLevel::Warn);
        assert_eq!(messages[1].level(), LogLevel::Error);
    }

    #[test]
    fn test_is_enabled_respects_threshold_and_wrapped() {
        // Capture is enabled at every level, so only the threshold matters
        let filtered = logs::capture().level(LogLevel::Info);
        let channel = filtered.new_channel("svc");
        assert!(!channel.is_enabled(LogLevel::Debug));
        assert!(channel.is_enabled(LogLevel::Info));
        assert!(channel.is_enabled(LogLevel::Error));

        // The null adapter is disabled at every level, so the threshold
        // alone is not enough
        let filtered = logs::none().level(LogLevel::Debug);
        let channel = filtered.new_channel("svc");
        assert!(!channel.is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_stacked_filters_compose() {
        let capture = logs::capture();
        let logger = capture
            .clone()
            .level(LogLevel::Warn)
            .level(LogLevel::Debug)
            .logger("svc");

        // The outer Debug threshold passes Info through, the inner Warn
        // threshold still drops it: both must pass
        logger.info("dropped");
        logger.warn("kept");

        assert_eq!(capture.messages().len(), 1);
        assert!(capture.has_message_with_text(LogLevel::Warn, "kept"));
    }

    #[test]
    fn test_none_threshold_disables_everything() {
        let capture = logs::capture();
        let logger = capture.clone().level(LogLevel::None).logger("svc");

        logger.error("dropped");

        assert!(capture.messages().is_empty());
        assert!(!logger.is_enabled(LogLevel::Error));
    }
}
