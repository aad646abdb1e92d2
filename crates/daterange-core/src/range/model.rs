//! The `DateRange` value and its validity/equality rules.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Inclusive span between two local wall-clock instants.
///
/// Either bound may be missing while a selection is in progress. A range with
/// only `from` set is *partial*; it is never valid for commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// A range with only its start picked.
    pub fn partial(from: NaiveDateTime) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Whole calendar days, `from` at midnight and `to` at the last millisecond.
    pub fn days(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        Some(Self::new(start_of_day(from), end_of_day(to)?))
    }

    /// Build a range from raw text bounds.
    ///
    /// Unparseable or missing text becomes an absent bound, so malformed
    /// input yields an incomplete (never committable) range instead of an
    /// error.
    pub fn from_input(from: Option<&str>, to: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| parse_date_time(s).ok());
        Self {
            from: parse(from),
            to: parse(to),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn is_partial(&self) -> bool {
        self.from.is_some() && self.to.is_none()
    }

    /// Complete and not reversed.
    pub fn is_valid(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => false,
        }
    }

    /// Equal at calendar-day granularity on both bounds.
    ///
    /// Incomplete ranges are never equal to anything, themselves included.
    pub fn same_days(&self, other: &Self) -> bool {
        match (self.from, self.to, other.from, other.to) {
            (Some(a_from), Some(a_to), Some(b_from), Some(b_to)) => {
                a_from.date() == b_from.date() && a_to.date() == b_to.date()
            }
            _ => false,
        }
    }

    /// Whether `date` falls within the range's calendar days.
    pub fn contains_day(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from.date() <= date && date <= to.date(),
            (Some(from), None) => from.date() == date,
            _ => false,
        }
    }

    /// Number of calendar days covered, counting both ends.
    pub fn day_count(&self) -> Option<i64> {
        if !self.is_valid() {
            return None;
        }
        let (from, to) = (self.from?, self.to?);
        Some((to.date() - from.date()).num_days() + 1)
    }
}

/// True iff `range` is present, complete and `from <= to`.
pub fn is_valid_date_range(range: Option<&DateRange>) -> bool {
    range.is_some_and(DateRange::is_valid)
}

/// True iff both ranges are complete and agree on the calendar day of each bound.
pub fn is_range_equal(a: Option<&DateRange>, b: Option<&DateRange>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_days(b),
        _ => false,
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Last millisecond of `date`. Built from the time of day, so it never
/// crosses into the next day and stays valid for `NaiveDate::MAX`.
pub fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_milli_opt(23, 59, 59, 999)
}

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse `YYYY-MM-DD` (midnight) or an ISO-like local date-time.
pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ValidationError::UnparseableDate(raw.to_string()))
}

/// Parse a plain `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::UnparseableDate(raw.to_string()))
}
