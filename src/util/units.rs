//! Units formatting and conversion utilities
//!
//! Human-readable sizes for the mock file browser and duration strings for
//! the configuration file.

use std::time::Duration;

/// Format bytes into a human-readable decimal size
///
/// # Examples
/// ```
/// use artifact_miner::util::units::format_size;
///
/// assert_eq!(format_size(999), "999 B");
/// assert_eq!(format_size(12_000_000), "12 MB");
/// assert_eq!(format_size(4_500_000), "4.5 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1000.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else if (size - size.round()).abs() < 0.05 {
        format!("{:.0} {}", size, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Parse a human-readable duration such as `80ms` or `1s 500ms`
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    humantime::parse_duration(input.trim())
        .map_err(|e| format!("Invalid duration '{}': {}", input, e))
}

/// Format a duration the same way [`parse_duration`] reads it
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Render a filled/empty bar of `width` cells for a percentage
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Serde adapter storing a [`Duration`] as a humantime string
pub mod duration_str {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}
