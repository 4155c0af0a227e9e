//! Time helpers. Timestamps are Unix milliseconds; display uses JST.

use chrono::{DateTime, FixedOffset, Offset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let now_jst: DateTime<FixedOffset> = Utc::now().with_timezone(&jst_offset());
    now_jst.timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) to an RFC 3339 string in JST.
///
/// Out-of-range values yield an empty string.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_millis)
        .map(|dt| dt.with_timezone(&jst_offset()).to_rfc3339())
        .unwrap_or_default()
}
