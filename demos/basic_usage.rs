//! Basic facade usage
//!
//! Demonstrates console logging, level filtering, and sub-logger derivation.
//!
//! Run with: cargo run --example basic_usage

use rust_log_facade::{defer, logs, LogAdapterExt, LogLevel};

fn main() {
    println!("1. Unfiltered console logging (all levels, including Debug):");
    let logger = logs::to_console().logger("demo");
    logger.debug("a debug line");
    logger.info1("listening on port {0}", 8080);
    logger.warn2("retry {0} of {1}", 2, 5);

    println!("\n2. Filtered at Warn (Debug and Info are suppressed):");
    let filtered = logs::to_console().level(LogLevel::Warn).logger("demo.filtered");
    filtered.info("this is hidden");
    filtered.warn("this is visible");
    filtered.error1("failed after {0} attempts", 3);

    println!("\n3. Sub-loggers share the adapter under a derived name:");
    let worker = logger.sub_logger("worker");
    worker.info("named demo.worker");

    println!("\n4. Deferred values are only computed when rendered:");
    filtered.debug1("never computed: {0}", defer(|| "expensive".repeat(1000)));
    filtered.warn1("computed now: {0}", defer(|| "cheap".to_string()));
}
