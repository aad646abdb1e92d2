//! Human-readable labels for ranges (trigger button text).

use chrono::NaiveDateTime;

use super::model::DateRange;

/// Abbreviated month, zero-padded day, four-digit year: `Jan 05, 2024`.
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

pub fn format_date(at: NaiveDateTime) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// Label for a range.
///
/// - no range or no `from`: `placeholder`
/// - no `to`, or `from` and `to` are the same instant: a single date
/// - otherwise `"<from> - <to>"`
///
/// Two different instants on the same day still render as a span.
pub fn format_date_range(range: Option<&DateRange>, placeholder: &str) -> String {
    let Some(from) = range.and_then(|r| r.from) else {
        return placeholder.to_string();
    };
    match range.and_then(|r| r.to) {
        Some(to) if to != from => format!("{} - {}", format_date(from), format_date(to)),
        _ => format_date(from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn placeholder_without_from() {
        assert_eq!(format_date_range(None, "Pick a date"), "Pick a date");
        let only_to = DateRange {
            from: None,
            to: Some(day(2024, 1, 5)),
        };
        assert_eq!(format_date_range(Some(&only_to), "Pick a date"), "Pick a date");
    }

    #[test]
    fn single_date_for_partial_range() {
        let range = DateRange::partial(day(2024, 1, 5));
        assert_eq!(format_date_range(Some(&range), ""), "Jan 05, 2024");
    }

    #[test]
    fn single_date_for_identical_instants() {
        let range = DateRange::new(day(2024, 1, 5), day(2024, 1, 5));
        assert_eq!(format_date_range(Some(&range), ""), "Jan 05, 2024");
    }

    #[test]
    fn span_for_distinct_bounds() {
        let range = DateRange::new(day(2024, 1, 5), day(2024, 2, 11));
        assert_eq!(
            format_date_range(Some(&range), ""),
            "Jan 05, 2024 - Feb 11, 2024"
        );
    }

    #[test]
    fn same_day_different_instants_is_a_span() {
        let range = DateRange::days(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .unwrap();
        assert_eq!(
            format_date_range(Some(&range), ""),
            "Jan 05, 2024 - Jan 05, 2024"
        );
    }
}
