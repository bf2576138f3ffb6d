//! Utility functions module
//!
//! Contains helpers for unit formatting, duration parsing and archive path
//! checks.

pub mod path;
pub mod units;

// Re-export commonly used functions
pub use path::is_archive_path;
pub use units::{format_duration, format_size, parse_duration, progress_bar};
