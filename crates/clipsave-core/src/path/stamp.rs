//! Timestamps used in fallback filenames.

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO 8601 UTC with millisecond precision, `:` and `.` replaced by `-`.
///
/// `2024-03-05T14:07:09.042Z` becomes `2024-03-05T14-07-09-042Z`.
pub fn filename_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(&[':', '.'][..], "-")
}
