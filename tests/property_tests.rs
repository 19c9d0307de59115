//! Property-based tests for rust_log_facade using proptest

use proptest::prelude::*;
use rust_log_facade::core::format::format_message;
use rust_log_facade::{logs, LogAdapterExt, LogLevel, Logger};

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::None),
    ]
}

fn message_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

// ============================================================================
// LogLevel properties
// ============================================================================

proptest! {
    /// String conversions round-trip for every level
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.uppercase().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with the underlying ordinal
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Display matches the uppercase name
    #[test]
    fn test_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.uppercase());
    }
}

// ============================================================================
// Level filter properties
// ============================================================================

proptest! {
    /// A filter at threshold T reports enabled exactly for levels >= T
    /// (over a sink that is enabled everywhere)
    #[test]
    fn test_filter_enablement(threshold in any_level(), level in any_level()) {
        let filtered = logs::capture().level(threshold);
        let logger = filtered.logger("prop");
        prop_assert_eq!(logger.is_enabled(level), threshold <= level);
    }

    /// Messages at or above the threshold are captured exactly once each,
    /// in call order; messages below leave no trace
    #[test]
    fn test_filter_capture_counts(
        threshold in message_level(),
        levels in prop::collection::vec(message_level(), 0..20),
    ) {
        let sink = logs::capture();
        let logger = sink.clone().level(threshold).logger("prop");

        for (i, level) in levels.iter().enumerate() {
            logger.log1(*level, "message {0}", i);
        }

        let expected: Vec<String> = levels
            .iter()
            .enumerate()
            .filter(|(_, level)| threshold <= **level)
            .map(|(i, _)| format!("message {}", i))
            .collect();
        let captured: Vec<String> = sink
            .messages()
            .iter()
            .map(|m| m.text().to_string())
            .collect();
        prop_assert_eq!(captured, expected);
    }
}

// ============================================================================
// Positional formatting properties
// ============================================================================

proptest! {
    /// Text without braces passes through untouched
    #[test]
    fn test_format_plain_passthrough(text in "[^{}]*") {
        prop_assert_eq!(format_message(&text, &[]), text);
    }

    /// A single placeholder splices the parameter in verbatim, even when the
    /// parameter itself contains braces (parameters are not re-scanned)
    #[test]
    fn test_format_single_substitution(
        prefix in "[^{}]*",
        suffix in "[^{}]*",
        param in ".*",
    ) {
        let format = format!("{}{{0}}{}", prefix, suffix);
        let expected = format!("{}{}{}", prefix, param, suffix);
        prop_assert_eq!(format_message(&format, &[&param]), expected);
    }

    /// Escaped braces always collapse to single literal braces
    #[test]
    fn test_format_escaped_braces(text in "[^{}]*") {
        let format = format!("{{{{{}}}}}", text);
        let expected = format!("{{{}}}", text);
        prop_assert_eq!(format_message(&format, &[]), expected);
    }
}

// ============================================================================
// Capture sink properties
// ============================================================================

proptest! {
    /// Every logged message is captured with its exact level and text
    #[test]
    fn test_capture_records_faithfully(
        entries in prop::collection::vec((message_level(), "[^{}]{0,40}"), 0..20),
    ) {
        let sink = logs::capture();
        let logger = Logger::with_adapter(sink.clone(), "prop");

        for (level, text) in &entries {
            logger.log(*level, text);
        }

        let captured = sink.messages();
        prop_assert_eq!(captured.len(), entries.len());
        for (message, (level, text)) in captured.iter().zip(&entries) {
            prop_assert_eq!(message.level(), *level);
            prop_assert_eq!(message.text(), text.as_str());
        }
    }
}
