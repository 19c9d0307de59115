//! # Rust Log Facade
//!
//! A pluggable logging facade: library code writes leveled, parameterized
//! messages through [`Logger`] without binding to any particular backend.
//! What happens to the output is decided once, by whichever [`LogAdapter`]
//! the embedding application picks.
//!
//! ## Features
//!
//! - **Composable adapters**: level filtering and multi-destination fan-out
//!   wrap any adapter without modifying it
//! - **In-memory capture**: assert on log output in tests
//! - **Lazy values**: expensive message parts are computed only if rendered
//! - **`log` crate bridge**: reuse whatever backend the application already
//!   has installed
//!
//! ## Quick start
//!
//! ```
//! use rust_log_facade::{logs, LogAdapterExt, LogLevel};
//!
//! let logging = logs::to_console().level(LogLevel::Info);
//! let logger = logging.logger("my-component");
//!
//! logger.info("starting up");
//! logger.info1("listening on port {0}", 8080);
//! logger.debug("suppressed by the Info filter");
//!
//! // Derived loggers share the adapter
//! let worker = logger.sub_logger("worker");
//! assert_eq!(worker.name(), "my-component.worker");
//! ```
//!
//! ## Testing against log output
//!
//! ```
//! use rust_log_facade::{logs, LogLevel, Logger};
//!
//! let sink = logs::capture();
//! let logger = Logger::with_adapter(sink.clone(), "svc");
//!
//! logger.warn1("disk {0}% full", 93);
//!
//! assert!(sink.has_message_with_text(LogLevel::Warn, "disk 93% full"));
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod logs;
pub mod macros;

pub mod prelude {
    pub use crate::adapters::{
        CapturedMessage, LevelFilter, LogCapture, MultiAdapter, NullAdapter, SimpleAdapter,
    };
    #[cfg(feature = "bridge")]
    pub use crate::adapters::LogCrateAdapter;
    pub use crate::config::{LogConfig, OutputConfig};
    pub use crate::core::{
        backtrace, defer, error_summary, Channel, Defer, FacadeError, LogAdapter, LogAdapterExt,
        LogLevel, Logger, Result, TimestampFormat,
    };
    pub use crate::logs;
}

pub use adapters::{
    CapturedMessage, LevelFilter, LogCapture, MultiAdapter, NullAdapter, SimpleAdapter,
};
#[cfg(feature = "bridge")]
pub use adapters::LogCrateAdapter;
pub use config::{LogConfig, OutputConfig};
pub use core::{
    backtrace, defer, error_summary, Channel, Defer, FacadeError, LogAdapter, LogAdapterExt,
    LogLevel, Logger, Result, TimestampFormat,
};
