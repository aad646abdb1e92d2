//! Min/max bounds on which calendar days may be picked.
//!
//! The selection controller never consults these; they are handed to the
//! calendar renderer, which disables out-of-bounds days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::DateRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
}

impl CalendarConstraints {
    pub fn new(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        Self { min_date, max_date }
    }

    /// A day is disabled when it is before `min_date` or after `max_date`.
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.min_date.is_some_and(|min| date < min) || self.max_date.is_some_and(|max| date > max)
    }

    /// Both present bounds fall on enabled days.
    pub fn is_range_selectable(&self, range: &DateRange) -> bool {
        [range.from, range.to]
            .into_iter()
            .flatten()
            .all(|at| !self.is_date_disabled(at.date()))
    }

    /// `min_date > max_date`: every day fails at least one bound check.
    pub fn is_empty(&self) -> bool {
        matches!((self.min_date, self.max_date), (Some(min), Some(max)) if min > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn unbounded_allows_everything() {
        let c = CalendarConstraints::default();
        assert!(!c.is_date_disabled(d(1900, 1, 1)));
        assert!(!c.is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let c = CalendarConstraints::new(Some(d(2024, 1, 10)), Some(d(2024, 1, 20)));
        assert!(c.is_date_disabled(d(2024, 1, 9)));
        assert!(!c.is_date_disabled(d(2024, 1, 10)));
        assert!(!c.is_date_disabled(d(2024, 1, 20)));
        assert!(c.is_date_disabled(d(2024, 1, 21)));
    }

    #[test]
    fn inverted_bounds_disable_every_day() {
        let c = CalendarConstraints::new(Some(d(2024, 2, 1)), Some(d(2024, 1, 1)));
        assert!(c.is_empty());
        let mut day = d(2023, 12, 1);
        while day <= d(2024, 3, 1) {
            assert!(c.is_date_disabled(day), "{day} should be disabled");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn range_selectable_checks_present_bounds() {
        let c = CalendarConstraints::new(None, Some(d(2024, 1, 20)));
        assert!(c.is_range_selectable(&DateRange::days(d(2024, 1, 1), d(2024, 1, 20)).unwrap()));
        assert!(!c.is_range_selectable(&DateRange::days(d(2024, 1, 1), d(2024, 1, 21)).unwrap()));
        assert!(c.is_range_selectable(&DateRange::default()));
    }
}
