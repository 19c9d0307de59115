//! Multi-destination fan-out adapter

use std::fmt;
use std::sync::Arc;

use crate::core::{Channel, LogAdapter, LogLevel};

/// Forwards output to any number of destination adapters, in order.
///
/// The destination list is fixed at construction. Each produced channel
/// holds one member channel per destination and forwards every write to all
/// of them unconditionally: fan-out is best-effort, with no transactional
/// guarantee across destinations.
pub struct MultiAdapter {
    destinations: Vec<Arc<dyn LogAdapter>>,
}

impl MultiAdapter {
    #[must_use]
    pub fn new(destinations: Vec<Arc<dyn LogAdapter>>) -> Self {
        Self { destinations }
    }
}

impl LogAdapter for MultiAdapter {
    fn new_channel(&self, name: &str) -> Arc<dyn Channel> {
        let channels = self
            .destinations
            .iter()
            .map(|destination| destination.new_channel(name))
            .collect();
        Arc::new(MultiChannel { channels })
    }
}

struct MultiChannel {
    channels: Vec<Arc<dyn Channel>>,
}

impl Channel for MultiChannel {
    /// Enabled when any member channel is enabled; false with no members.
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.channels.iter().any(|channel| channel.is_enabled(level))
    }

    fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        for channel in &self.channels {
            channel.log(level, message);
        }
    }

    fn log1(&self, level: LogLevel, format: &str, param: &dyn fmt::Display) {
        for channel in &self.channels {
            channel.log1(level, format, param);
        }
    }

    fn log2(
        &self,
        level: LogLevel,
        format: &str,
        param1: &dyn fmt::Display,
        param2: &dyn fmt::Display,
    ) {
        for channel in &self.channels {
            channel.log2(level, format, param1, param2);
        }
    }

    fn logv(&self, level: LogLevel, format: &str, params: &[&dyn fmt::Display]) {
        for channel in &self.channels {
            channel.logv(level, format, params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogAdapterExt, Logger};
    use crate::logs;

    #[test]
    fn test_forwards_to_every_destination_in_order() {
        let first = logs::capture();
        let second = logs::capture();
        let destinations: Vec<Arc<dyn LogAdapter>> = vec![first.clone(), second.clone()];
        let logger = Logger::with_adapter(MultiAdapter::new(destinations), "fanout");

        logger.info("one");
        logger.warn1("two {0}", 2);

        for capture in [&first, &second] {
            let messages = capture.messages();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].text(), "one");
            assert_eq!(messages[1].text(), "two 2");
        }
    }

    #[test]
    fn test_zero_destinations_disabled_everywhere() {
        let adapter = MultiAdapter::new(Vec::new());
        let channel = adapter.new_channel("empty");
        for level in [
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert!(!channel.is_enabled(level));
        }
    }

    #[test]
    fn test_enabled_if_any_destination_enabled() {
        let info_filtered: Arc<dyn LogAdapter> = Arc::new(logs::capture().level(LogLevel::Info));
        let warn_filtered: Arc<dyn LogAdapter> = Arc::new(logs::capture().level(LogLevel::Warn));
        let adapter = MultiAdapter::new(vec![info_filtered, warn_filtered]);
        let channel = adapter.new_channel("mixed");

        assert!(!channel.is_enabled(LogLevel::Debug));
        assert!(channel.is_enabled(LogLevel::Info));
        assert!(channel.is_enabled(LogLevel::Warn));
        assert!(channel.is_enabled(LogLevel::Error));
    }

    #[test]
    fn test_member_filters_apply_per_destination() {
        let verbose = logs::capture();
        let quiet = logs::capture();
        let destinations: Vec<Arc<dyn LogAdapter>> = vec![
            verbose.clone(),
            Arc::new(quiet.clone().level(LogLevel::Error)),
        ];
        let logger = Logger::with_adapter(MultiAdapter::new(destinations), "split");

        logger.info("info line");
        logger.error("error line");

        assert_eq!(verbose.messages().len(), 2);
        assert_eq!(quiet.messages().len(), 1);
        assert!(quiet.has_message_with_text(LogLevel::Error, "error line"));
    }
}
