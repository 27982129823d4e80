//! Time and timestamp helpers.
//!
//! Event timestamps are integer milliseconds since the Unix epoch, exactly as
//! the host reports them.

use chrono::{DateTime, FixedOffset, Utc};

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Return the current time in epoch milliseconds.
#[must_use]
pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

/// Format `millis` as a 24-hour `HH:MM:SS.mmm` clock reading at `offset`.
///
/// Returns `None` when `millis` falls outside the range chrono can represent.
#[must_use]
pub fn format_clock(millis: EpochMillis, offset: FixedOffset) -> Option<String> {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(
        utc.with_timezone(&offset)
            .format("%H:%M:%S%.3f")
            .to_string(),
    )
}

/// Build a fixed offset from a signed number of minutes east of UTC.
///
/// Returns `None` for offsets of a full day or more.
#[must_use]
pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(minutes.checked_mul(60)?)
}
