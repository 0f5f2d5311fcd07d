//! Date/time utilities for displaying creation times.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// RFC 1123 layout used by listings.
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Format a DateTime<Utc> in the specified timezone.
///
/// # Arguments
///
/// * `dt` - DateTime in UTC
/// * `timezone` - Timezone name (e.g., "Asia/Taipei", "UTC")
/// * `format` - Output format string (e.g., "%Y/%m/%d %H:%M")
///
/// An unknown timezone falls back to UTC.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}

/// Format a creation time in RFC 1123 layout.
pub fn format_rfc1123(dt: &DateTime<Utc>, timezone: &str) -> String {
    format_utc_datetime(dt, timezone, RFC1123_FORMAT)
}
