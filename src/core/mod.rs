//! Core contracts and the logger facade

pub mod adapter;
pub mod channel;
pub mod error;
pub mod format;
pub mod lazy;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use adapter::{LogAdapter, LogAdapterExt};
pub use channel::Channel;
pub use error::{FacadeError, Result};
pub use format::format_message;
pub use lazy::{backtrace, defer, error_summary, Defer};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use timestamp::TimestampFormat;
