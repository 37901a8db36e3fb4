//! Timestamp parsing and normalization to the reference offset

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use signalfeed_core::{REFERENCE_OFFSET_HOURS, UtcOffset};

use crate::error::{FormatError, TransformError, TransformResult};

/// Rendering of a normalized instant, e.g. `2023-08-04T10:00+0700`
pub const SIGNAL_AT_FORMAT: &str = "%Y-%m-%dT%H:%M%z";

/// Timestamp layouts found in trade list exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Intraday bars: `2023-08-04 13:00`
    Minute,
    /// Daily bars: `2023-08-04`, read as midnight
    Daily,
}

/// Accepted formats, tried in order
pub const ACCEPTED_FORMATS: [TimestampFormat; 2] =
    [TimestampFormat::Minute, TimestampFormat::Daily];

impl TimestampFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::Minute => "%Y-%m-%d %H:%M",
            TimestampFormat::Daily => "%Y-%m-%d",
        }
    }

    fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        match self {
            TimestampFormat::Minute => NaiveDateTime::parse_from_str(input, self.pattern()).ok(),
            TimestampFormat::Daily => NaiveDate::parse_from_str(input, self.pattern())
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
        }
    }
}

/// Parse a local timestamp, first matching format wins
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, FormatError> {
    let trimmed = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| format.parse(trimmed))
        .ok_or_else(|| FormatError {
            input: input.to_string(),
            expected: ACCEPTED_FORMATS
                .iter()
                .map(|format| format.pattern())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_HOURS * 3600)
        .expect("reference offset is a whole number of hours below 24")
}

/// Render a local instant at `utc` as wall-clock time at the reference offset
///
/// Shifts by `7 - H` hours and labels the result `+0700`.
pub fn normalize_instant(instant: NaiveDateTime, utc: UtcOffset) -> TransformResult<String> {
    let out_of_range = || TransformError::OutOfRange {
        instant: instant.to_string(),
    };
    let shifted = instant
        .checked_add_signed(TimeDelta::hours(utc.hours_to_reference()))
        .ok_or_else(out_of_range)?;

    let normalized = reference_offset()
        .from_local_datetime(&shifted)
        .single()
        .ok_or_else(out_of_range)?;
    Ok(normalized.format(SIGNAL_AT_FORMAT).to_string())
}
