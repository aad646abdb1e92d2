//! Relative shortcut definitions resolved against a clock reading.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// How a shortcut's range is derived from "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresetSpec {
    /// Start to end of the current day.
    Today,
    /// Start to end of the previous day.
    Yesterday,
    /// `now - (days - 1)` up to `now`, so `days = 7` spans a week including today.
    LastDays { days: u32 },
    /// First to last day of the current month.
    ThisMonth,
    /// First to last day of the previous month.
    LastMonth,
    /// January 1st to December 31st of the current year.
    ThisYear,
    /// Whole days between two fixed dates.
    Fixed { from: NaiveDate, to: NaiveDate },
}

impl PresetSpec {
    /// Concrete range for this spec at `now`.
    ///
    /// `None` when the arithmetic leaves chrono's representable range.
    pub fn resolve(&self, now: NaiveDateTime) -> Option<DateRange> {
        let today = now.date();
        match self {
            PresetSpec::Today => DateRange::days(today, today),
            PresetSpec::Yesterday => {
                let yesterday = today.pred_opt()?;
                DateRange::days(yesterday, yesterday)
            }
            PresetSpec::LastDays { days } => {
                let back = i64::from(days.saturating_sub(1));
                let from = now.checked_sub_signed(Duration::days(back))?;
                Some(DateRange::new(from, now))
            }
            PresetSpec::ThisMonth => month_range(first_of_month(today)?),
            PresetSpec::LastMonth => {
                let first = first_of_month(today)?.checked_sub_months(Months::new(1))?;
                month_range(first)
            }
            PresetSpec::ThisYear => {
                let first = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
                let last = NaiveDate::from_ymd_opt(today.year(), 12, 31)?;
                DateRange::days(first, last)
            }
            PresetSpec::Fixed { from, to } => DateRange::days(*from, *to),
        }
    }

    /// Label used when a config entry does not name the shortcut.
    pub fn default_label(&self) -> String {
        match self {
            PresetSpec::Today => "Today".into(),
            PresetSpec::Yesterday => "Yesterday".into(),
            PresetSpec::LastDays { days } => format!("Last {days} Days"),
            PresetSpec::ThisMonth => "This Month".into(),
            PresetSpec::LastMonth => "Last Month".into(),
            PresetSpec::ThisYear => "This Year".into(),
            PresetSpec::Fixed { from, to } => format!("{from} to {to}"),
        }
    }
}

/// A shortcut as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    /// Falls back to [`PresetSpec::default_label`] when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub range: PresetSpec,
}

impl PresetEntry {
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.range.default_label())
    }
}

/// The built-in shortcut list, in display order.
pub fn default_specs() -> [PresetSpec; 6] {
    [
        PresetSpec::Today,
        PresetSpec::Yesterday,
        PresetSpec::LastDays { days: 7 },
        PresetSpec::LastDays { days: 30 },
        PresetSpec::ThisMonth,
        PresetSpec::LastMonth,
    ]
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn month_range(first: NaiveDate) -> Option<DateRange> {
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    DateRange::days(first, last)
}
