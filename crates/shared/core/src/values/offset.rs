use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ValueError, ValueResult};

/// Offset every published signal is expressed in (UTC+7)
pub const REFERENCE_OFFSET_HOURS: i32 = 7;

const MIN_OFFSET_HOURS: i32 = -12;
const MAX_OFFSET_HOURS: i32 = 14;

/// Whole-hour UTC offset of the exported trade list, written `UTC±H`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcOffset {
    hours: i32,
}

impl UtcOffset {
    /// The reference offset, also the default for trade lists
    pub const REFERENCE: UtcOffset = UtcOffset {
        hours: REFERENCE_OFFSET_HOURS,
    };

    pub fn from_hours(hours: i32) -> ValueResult<Self> {
        if !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
            return Err(ValueError::InvalidUtcOffset(format!("UTC{:+}", hours)));
        }
        Ok(Self { hours })
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    /// Hours to add to a local time at this offset to get the wall-clock
    /// time at the reference offset
    pub fn hours_to_reference(&self) -> i64 {
        i64::from(REFERENCE_OFFSET_HOURS - self.hours)
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl FromStr for UtcOffset {
    type Err = ValueError;

    /// Accepts `UTC+8`, `UTC-5`, `UTC+0` and unsigned `UTC7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidUtcOffset(s.to_string());
        let trimmed = s.trim();

        let hours = trimmed
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("UTC"))
            .map(|_| &trimmed[3..])
            .ok_or_else(invalid)?
            .parse::<i32>()
            .map_err(|_| invalid())?;

        Self::from_hours(hours).map_err(|_| invalid())
    }
}

impl TryFrom<String> for UtcOffset {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UtcOffset> for String {
    fn from(offset: UtcOffset) -> Self {
        offset.to_string()
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{:+}", self.hours)
    }
}
