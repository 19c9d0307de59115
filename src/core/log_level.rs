//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FacadeError;

/// Severity classification gating visibility.
///
/// Levels are ranked in ascending order from [`LogLevel::Debug`] to
/// [`LogLevel::Error`]. Whatever minimum level is enabled for a logger, any
/// message at a lower level is suppressed: with a minimum of `Warn` there is
/// no output for `Debug` or `Info`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum LogLevel {
    /// Very detailed messages that are rarely useful except in diagnosing an
    /// unusual problem.
    Debug = 0,
    /// Informational messages logged during normal operation.
    #[default]
    Info = 1,
    /// Unexpected conditions worth noting that do not necessarily prevent
    /// things from working.
    Warn = 2,
    /// Errors that should not happen during normal operation and should be
    /// investigated.
    Error = 3,
    /// Sentinel that disables all output when used as a filter threshold.
    /// Never used as the level of an actual message.
    None = 4,
}

impl LogLevel {
    /// Returns the all-uppercase name of the level (`DEBUG`, `INFO`, ...).
    pub fn uppercase(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }

    /// Maps to the `log` crate's level. `None` has no counterpart there; it
    /// maps to "never log".
    #[cfg(feature = "bridge")]
    pub(crate) fn to_log_crate(self) -> Option<log::Level> {
        match self {
            LogLevel::Debug => Some(log::Level::Debug),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Error => Some(log::Level::Error),
            LogLevel::None => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uppercase())
    }
}

impl FromStr for LogLevel {
    type Err = FacadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" => Ok(LogLevel::None),
            _ => Err(FacadeError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::None);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(LogLevel::Debug.uppercase(), "DEBUG");
        assert_eq!(LogLevel::Info.uppercase(), "INFO");
        assert_eq!(LogLevel::Warn.uppercase(), "WARN");
        assert_eq!(LogLevel::Error.uppercase(), "ERROR");
        assert_eq!(LogLevel::None.uppercase(), "NONE");
    }

    #[test]
    fn test_display_matches_uppercase() {
        assert_eq!(format!("{}", LogLevel::Warn), "WARN");
    }

    #[test]
    fn test_parse() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("none".parse::<LogLevel>().unwrap(), LogLevel::None);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"Warn\"");
        let level: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, LogLevel::Warn);
    }
}
