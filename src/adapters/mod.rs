//! Adapter implementations

pub mod capture;
pub mod level_filter;
pub mod multi;
pub mod null;
pub mod simple;

#[cfg(feature = "bridge")]
pub mod log_bridge;

pub use capture::{CapturedMessage, LogCapture};
pub use level_filter::LevelFilter;
pub use multi::MultiAdapter;
pub use null::NullAdapter;
pub use simple::SimpleAdapter;

#[cfg(feature = "bridge")]
pub use log_bridge::LogCrateAdapter;
