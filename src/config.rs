//! Configuration surface for embedding applications
//!
//! Applications that want to choose a destination, minimum level and
//! timestamp format from a settings file deserialize a [`LogConfig`] and
//! call [`LogConfig::build`] to obtain the adapter stack. Library code never
//! touches this module; it only receives the built adapter.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::adapters::SimpleAdapter;
use crate::core::error::{FacadeError, Result};
use crate::core::{LogAdapter, LogAdapterExt, LogLevel, TimestampFormat};
use crate::logs;

/// Where log lines go.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputConfig {
    /// Standard error stream
    #[default]
    Console,
    /// A file, created (truncated) at build time
    File { path: String },
    /// Discard everything
    Null,
}

/// Declarative logging configuration.
///
/// # Example
///
/// ```
/// use rust_log_facade::{LogConfig, Logger};
///
/// let config = LogConfig::from_json(
///     r#"{ "output": { "kind": "null" }, "min_level": "Warn" }"#,
/// ).unwrap();
/// let adapter = config.build().unwrap();
/// let logger = Logger::with_adapter(adapter, "app");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub output: OutputConfig,

    /// Minimum visible level; absent means no filtering. `None` (the level)
    /// disables all output.
    #[serde(default)]
    pub min_level: Option<LogLevel>,

    /// Whether each line carries a timestamp.
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,

    /// strftime pattern overriding the default ISO 8601 rendering.
    #[serde(default)]
    pub timestamp_format: Option<String>,
}

fn default_timestamps() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            min_level: None,
            timestamps: true,
            timestamp_format: None,
        }
    }
}

impl LogConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Builds the configured adapter stack.
    ///
    /// File destinations are opened here; failures surface as
    /// [`FacadeError`] rather than at the first log call.
    pub fn build(&self) -> Result<Arc<dyn LogAdapter>> {
        if !self.timestamps && self.timestamp_format.is_some() {
            return Err(FacadeError::config(
                "timestamp_format",
                "set while timestamps are disabled",
            ));
        }

        let adapter: Arc<dyn LogAdapter> = match &self.output {
            OutputConfig::Null => Arc::new(logs::none()),
            OutputConfig::Console => Arc::new(self.configure(logs::to_console())),
            OutputConfig::File { path } => {
                let file = File::create(path).map_err(|e| {
                    FacadeError::config("output", format!("cannot open '{}': {}", path, e))
                })?;
                Arc::new(self.configure(logs::to_writer(file)))
            }
        };

        Ok(match self.min_level {
            Some(level) => Arc::new(adapter.level(level)),
            None => adapter,
        })
    }

    fn configure(&self, adapter: SimpleAdapter) -> SimpleAdapter {
        if !self.timestamps {
            return adapter.without_timestamp();
        }
        match &self.timestamp_format {
            Some(pattern) => {
                adapter.with_timestamp_format(TimestampFormat::Custom(pattern.clone()))
            }
            None => adapter,
        }
    }
}
