//! Multi-destination fan-out
//!
//! Sends the same output to a filtered console adapter and an in-memory
//! capture sink, then inspects what the sink recorded.
//!
//! Run with: cargo run --example multi_destination

use rust_log_facade::{logs, LogAdapter, LogAdapterExt, LogLevel, Logger};
use std::sync::Arc;

fn main() {
    let capture = logs::capture();
    let destinations: Vec<Arc<dyn LogAdapter>> = vec![
        Arc::new(logs::to_console().level(LogLevel::Warn)),
        capture.clone(),
    ];
    let logger = Logger::with_adapter(logs::to_multiple(destinations), "fanout");

    logger.info("captured only");
    logger.warn1("captured and printed: {0}", 42);

    println!("--- everything the sink captured ---");
    println!("{}", capture);
}
