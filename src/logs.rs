//! Factory functions for the built-in adapters
//!
//! These cover the basic behaviors: logging to the console or any writer,
//! discarding output, capturing output for tests, and fanning out to several
//! destinations. To direct output into another logging framework the
//! application already uses, see [`to_log_crate`].
//!
//! Adapters returned here are configurable before use: wrap with
//! [`LogAdapterExt::level`](crate::core::LogAdapterExt::level) to set a
//! minimum level, or use the [`SimpleAdapter`] builder methods to adjust
//! timestamps.

use std::io;
use std::sync::Arc;

use crate::adapters::{LevelFilter, LogCapture, MultiAdapter, NullAdapter, SimpleAdapter};
use crate::core::{LogAdapter, LogAdapterExt, LogLevel};

/// A stub that generates no log output.
#[must_use]
pub fn none() -> NullAdapter {
    NullAdapter::new()
}

/// Console output with `Debug` suppressed: the default configuration for
/// applications that do not choose anything else.
#[must_use]
pub fn default_adapter() -> LevelFilter {
    to_console().level(LogLevel::Info)
}

/// Writes every line to the standard error stream.
///
/// All levels are enabled, including `Debug`; filter with
/// [`LogAdapterExt::level`](crate::core::LogAdapterExt::level).
#[must_use]
pub fn to_console() -> SimpleAdapter {
    SimpleAdapter::to_console()
}

/// Writes every line to `writer` (a file, a pipe, an in-memory buffer).
#[must_use]
pub fn to_writer(writer: impl io::Write + Send + 'static) -> SimpleAdapter {
    SimpleAdapter::to_writer(writer)
}

/// Calls `write_line` for each line of output.
///
/// # Example
///
/// ```
/// use rust_log_facade::logs;
///
/// // Writes lines to stdout with a prefix
/// let adapter = logs::to_method(|line| println!("app | {}", line));
/// ```
#[must_use]
pub fn to_method(write_line: impl Fn(&str) + Send + Sync + 'static) -> SimpleAdapter {
    SimpleAdapter::to_method(write_line)
}

/// Forwards output to every adapter in `destinations`, in order.
#[must_use]
pub fn to_multiple(destinations: Vec<Arc<dyn LogAdapter>>) -> MultiAdapter {
    MultiAdapter::new(destinations)
}

/// Captures messages in memory for later inspection.
///
/// Clone the returned handle: one copy goes to the code under test as its
/// adapter, the other stays with the test for assertions.
#[must_use]
pub fn capture() -> Arc<LogCapture> {
    Arc::new(LogCapture::new())
}

/// Delegates to the `log` crate facade, the logging framework most Rust
/// applications already have a backend installed for.
#[cfg(feature = "bridge")]
#[must_use]
pub fn to_log_crate() -> crate::adapters::LogCrateAdapter {
    crate::adapters::LogCrateAdapter::new()
}
