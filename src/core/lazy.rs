//! Lazily rendered log values
//!
//! Some log messages include a value expensive enough to compute that the
//! work should only happen if the message is actually rendered. The logger's
//! parameter type (`&dyn fmt::Display`) already defers string conversion
//! until a sink renders the message; the helpers here wrap arbitrary
//! computations in that shape.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

/// Wraps a string producer so the work happens only when a sink renders the
/// value.
///
/// Constructing the wrapper does not invoke the producer, and the result is
/// never cached: every rendering pass invokes the producer again.
///
/// # Example
///
/// ```
/// use rust_log_facade::{defer, logs, LogAdapterExt, LogLevel};
///
/// let logger = logs::to_console().level(LogLevel::Info).logger("svc");
/// // The closure only runs if Debug output is enabled (here it is not)
/// logger.debug1("expensive state: {0}", defer(|| "computed".repeat(1000)));
/// ```
pub fn defer<F: Fn() -> String>(producer: F) -> Defer<F> {
    Defer { producer }
}

/// Return type of [`defer`]; its `Display` delegates to the producer.
pub struct Defer<F: Fn() -> String> {
    producer: F,
}

impl<F: Fn() -> String> fmt::Display for Defer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&(self.producer)())
    }
}

impl<F: Fn() -> String> fmt::Debug for Defer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Defer(..)")
    }
}

/// Lazily renders an error as `"{type}: {message}"`, appending
/// `" (caused by: ...)"` for each link of the `source()` chain.
///
/// When the top-level message is empty the type name alone is used. Nothing
/// is rendered unless a sink actually formats the value, so logging errors
/// this way costs almost nothing when the level is disabled.
pub fn error_summary<E: Error + ?Sized>(err: &E) -> Defer<impl Fn() -> String + '_> {
    defer(move || {
        let message = err.to_string();
        let mut out = if message.is_empty() {
            std::any::type_name::<E>().to_string()
        } else {
            format!("{}: {}", std::any::type_name::<E>(), message)
        };
        let mut cause = err.source();
        let mut depth = 0;
        while let Some(inner) = cause {
            out.push_str(" (caused by: ");
            out.push_str(&inner.to_string());
            depth += 1;
            cause = inner.source();
        }
        for _ in 0..depth {
            out.push(')');
        }
        out
    })
}

/// Lazily captures and renders the current stack trace.
///
/// The capture cost is only paid if a sink actually renders the value.
pub fn backtrace() -> Defer<impl Fn() -> String> {
    defer(|| Backtrace::force_capture().to_string())
}
