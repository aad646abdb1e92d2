//! Integration tests for the picker's commit and disclosure behavior.

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use daterange_core::{
    format_date_range, CloseReason, DateRange, DateRangePicker, Event, FixedClock, PickerOptions,
    PredefinedRangeCatalog,
};

type Seen = Arc<Mutex<Vec<Option<DateRange>>>>;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(16, 20, 0)
        .unwrap()
}

fn day(m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn options() -> PickerOptions {
    PickerOptions::with_clock(&FixedClock(now()))
}

fn picker(options: PickerOptions, value: Option<DateRange>) -> (DateRangePicker, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let picker = DateRangePicker::new(options, PredefinedRangeCatalog::defaults(now()), value)
        .with_listener(move |v| sink.lock().unwrap().push(v.copied()));
    (picker, seen)
}

#[test]
fn scenario_a_partial_draft_cannot_be_applied() {
    let (mut p, seen) = picker(options(), None);
    p.open();
    p.select_draft_range(Some(DateRange::partial(day(1, 5))));

    assert!(!p.can_apply());
    assert!(p.apply().is_empty());
    assert!(p.is_open());
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(p.draft(), Some(&DateRange::partial(day(1, 5))));
}

#[test]
fn scenario_b_auto_applied_shortcut_commits_and_closes() {
    let mut opts = options();
    opts.apply_on_predefined_select = true;
    let (mut p, seen) = picker(opts, None);
    let range = DateRange::new(day(1, 1), day(1, 7));

    p.open();
    let events = p.select_predefined_range(range);

    assert_eq!(
        events,
        vec![
            Event::DraftChanged { draft: Some(range) },
            Event::RangeCommitted { value: Some(range) },
            Event::DisclosureClosed {
                reason: CloseReason::PresetApplied,
                draft_reset: false,
            },
        ]
    );
    assert_eq!(*seen.lock().unwrap(), vec![Some(range)]);
    assert!(!p.is_open());
    assert_eq!(p.value(), None);

    p.set_value(Some(range));
    assert_eq!(p.value(), Some(&range));
}

#[test]
fn scenario_c_dismiss_discards_unapplied_edits() {
    let committed = DateRange::new(day(1, 1), day(1, 2));
    let (mut p, seen) = picker(options(), Some(committed));

    p.open();
    p.select_draft_range(Some(DateRange::new(day(2, 3), day(2, 4))));
    let events = p.dismiss();

    assert_eq!(
        events,
        vec![Event::DisclosureClosed {
            reason: CloseReason::Dismissed,
            draft_reset: true,
        }]
    );
    assert_eq!(p.draft(), Some(&committed));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn scenario_c_variant_auto_apply_keeps_dismissed_draft() {
    let mut opts = options();
    opts.apply_on_predefined_select = true;
    let committed = DateRange::new(day(1, 1), day(1, 2));
    let edited = DateRange::new(day(2, 3), day(2, 4));
    let (mut p, seen) = picker(opts, Some(committed));

    p.open();
    p.select_draft_range(Some(edited));
    p.dismiss();

    assert_eq!(p.draft(), Some(&edited));
    assert_eq!(p.value(), Some(&committed));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn scenario_d_clear_on_select_with_close() {
    let mut opts = options();
    opts.clear_on_select = true;
    opts.close_on_clear = true;
    let (mut p, seen) = picker(opts, Some(DateRange::new(day(1, 1), day(1, 2))));

    p.open();
    let events = p.clear();

    assert_eq!(
        events,
        vec![
            Event::DraftChanged { draft: None },
            Event::RangeCommitted { value: None },
            Event::DisclosureClosed {
                reason: CloseReason::Cleared,
                draft_reset: false,
            },
        ]
    );
    assert_eq!(p.draft(), None);
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert!(!p.is_open());
}

#[test]
fn clear_without_clear_on_select_waits_for_apply() {
    let committed = DateRange::new(day(1, 1), day(1, 2));
    let (mut p, seen) = picker(options(), Some(committed));

    p.open();
    p.clear();
    assert!(seen.lock().unwrap().is_empty());
    assert!(p.can_apply());
    assert!(!p.can_clear());

    p.apply();
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert_eq!(p.value(), Some(&committed));

    p.set_value(None);
    assert_eq!(p.value(), None);
    assert_eq!(p.trigger_label(), "Pick a date range");
}

#[test]
fn clear_on_select_without_close_stays_open() {
    let mut opts = options();
    opts.clear_on_select = true;
    let (mut p, seen) = picker(opts, Some(DateRange::new(day(1, 1), day(1, 2))));

    p.open();
    p.clear();
    assert_eq!(*seen.lock().unwrap(), vec![None]);
    assert!(p.is_open());
}

#[test]
fn scenario_e_identical_instants_format_as_one_date() {
    let range = DateRange::new(day(1, 5), day(1, 5));
    assert_eq!(format_date_range(Some(&range), "No range"), "Jan 05, 2024");
}

#[test]
fn external_value_change_overwrites_open_draft() {
    let (mut p, seen) = picker(options(), None);
    p.open();
    p.select_draft_range(Some(DateRange::partial(day(1, 5))));

    let forced = DateRange::new(day(2, 1), day(2, 10));
    p.set_value(Some(forced));

    assert_eq!(p.draft(), Some(&forced));
    assert!(p.is_open());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn apply_twice_is_harmless() {
    let (mut p, seen) = picker(options(), None);
    let range = DateRange::new(day(1, 1), day(1, 3));
    p.open();
    p.select_draft_range(Some(range));
    p.apply();
    let second = p.apply();

    assert_eq!(second, vec![Event::RangeCommitted { value: Some(range) }]);
    assert!(!p.is_open());
    assert_eq!(seen.lock().unwrap().len(), 2);

    p.set_value(Some(range));
    assert_eq!(p.value(), Some(&range));
    assert_eq!(p.apply(), second);
}

#[test]
fn dismiss_after_unechoed_commit_restores_host_value() {
    let host = DateRange::new(day(1, 1), day(1, 2));
    let (mut p, seen) = picker(options(), Some(host));

    p.open();
    p.select_draft_range(Some(DateRange::new(day(2, 1), day(2, 2))));
    p.apply();
    assert_eq!(seen.lock().unwrap().len(), 1);

    p.open();
    p.clear();
    p.dismiss();
    assert_eq!(p.value(), Some(&host));
    assert_eq!(p.draft(), Some(&host));
    assert_eq!(p.trigger_label(), "Jan 01, 2024 - Jan 02, 2024");
}

#[test]
fn auto_apply_ignores_reversed_shortcut_value() {
    let mut opts = options();
    opts.apply_on_predefined_select = true;
    let (mut p, seen) = picker(opts, None);

    p.open();
    let events = p.select_predefined_range(DateRange::new(day(2, 9), day(2, 1)));
    assert!(events.is_empty());
    assert!(seen.lock().unwrap().is_empty());
    assert!(p.is_open());
}

#[test]
fn reversed_drag_can_be_dismissed() {
    let (mut p, _) = picker(options(), None);
    p.open();
    p.select_draft_range(Some(DateRange::new(day(3, 9), day(3, 2))));
    assert!(!p.can_apply());
    p.dismiss();
    assert!(!p.is_open());
    assert_eq!(p.draft(), None);
}

#[test]
fn shortcut_highlight_follows_draft_not_value() {
    let catalog = PredefinedRangeCatalog::defaults(now());
    let yesterday = catalog.find("Yesterday").unwrap().value;
    let (mut p, _) = picker(options(), Some(catalog.find("Today").unwrap().value));

    p.open();
    p.select_predefined_label("Yesterday");
    assert!(p.is_predefined_range_selected(&yesterday));
    assert_eq!(p.selected_predefined_label(), Some("Yesterday"));
    assert_eq!(p.trigger_label(), "Mar 15, 2024 - Mar 15, 2024");
}

#[test]
fn inverted_bounds_disable_every_date_but_controller_still_works() {
    let mut opts = options();
    opts.min_date = NaiveDate::from_ymd_opt(2024, 6, 1);
    opts.max_date = NaiveDate::from_ymd_opt(2024, 5, 1);
    let (mut p, seen) = picker(opts, None);

    let constraints = p.constraints();
    assert!(constraints.is_empty());
    assert!(constraints.is_date_disabled(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()));

    p.open();
    let range = DateRange::new(day(5, 10), day(5, 12));
    p.select_draft_range(Some(range));
    p.apply();
    assert_eq!(*seen.lock().unwrap(), vec![Some(range)]);
}
