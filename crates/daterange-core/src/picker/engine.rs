//! The composed picker: options, shortcut catalog, selection controller and
//! disclosure behind one command surface.
//!
//! Every command runs to completion and returns the events it produced. The
//! change listener fires only at commit points (apply, auto-applied shortcut,
//! clear-on-select), never on intermediate drag steps.
//!
//! The host owns the committed value. A commit only notifies the listener;
//! [`DateRangePicker::value`] changes once the host calls
//! [`DateRangePicker::set_value`].
//!
//! ## Usage
//!
//! ```ignore
//! let mut picker = DateRangePicker::new(options, catalog, None)
//!     .with_listener(|value| println!("committed {value:?}"));
//! picker.open();
//! picker.select_draft_range(Some(range));
//! picker.apply();
//! // host accepted the commit
//! picker.set_value(Some(range));
//! ```

use std::fmt;

use tracing::{debug, trace};

use super::controller::{Commit, SelectionController};
use super::disclosure::{resets_draft, CloseReason, Disclosure};
use super::options::PickerOptions;
use crate::catalog::{PredefinedRange, PredefinedRangeCatalog};
use crate::events::Event;
use crate::range::{format_date_range, CalendarConstraints, DateRange};

/// Receives every committed value, `None` meaning "no selection".
pub type ChangeListener = Box<dyn FnMut(Option<&DateRange>) + Send>;

pub struct DateRangePicker {
    options: PickerOptions,
    catalog: PredefinedRangeCatalog,
    controller: SelectionController,
    disclosure: Disclosure,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("options", &self.options)
            .field("catalog", &self.catalog)
            .field("controller", &self.controller)
            .field("disclosure", &self.disclosure)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl DateRangePicker {
    /// Closed picker whose draft is seeded from `value`.
    pub fn new(
        options: PickerOptions,
        catalog: PredefinedRangeCatalog,
        value: Option<DateRange>,
    ) -> Self {
        Self {
            options,
            catalog,
            controller: SelectionController::new(value),
            disclosure: Disclosure::new(),
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl FnMut(Option<&DateRange>) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn catalog(&self) -> &PredefinedRangeCatalog {
        &self.catalog
    }

    /// The committed value as last set by the host.
    pub fn value(&self) -> Option<&DateRange> {
        self.controller.committed()
    }

    pub fn draft(&self) -> Option<&DateRange> {
        self.controller.draft()
    }

    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    pub fn can_apply(&self) -> bool {
        self.controller.can_apply()
    }

    pub fn can_clear(&self) -> bool {
        self.controller.can_clear()
    }

    pub fn constraints(&self) -> CalendarConstraints {
        self.options.constraints()
    }

    /// Trigger button text for the committed value.
    pub fn trigger_label(&self) -> String {
        format_date_range(self.value(), &self.options.placeholder)
    }

    /// Text for the in-progress selection.
    pub fn draft_label(&self) -> String {
        format_date_range(self.draft(), &self.options.placeholder)
    }

    pub fn is_predefined_range_selected(&self, candidate: &DateRange) -> bool {
        self.controller.is_predefined_range_selected(candidate)
    }

    /// Label of the shortcut matching the draft, if any.
    pub fn selected_predefined_label(&self) -> Option<&str> {
        self.catalog
            .selected(self.draft())
            .map(|r| r.label.as_str())
    }

    /// Shortcuts to render; empty when the list is hidden.
    pub fn visible_presets(&self) -> &[PredefinedRange] {
        if self.options.show_predefined_ranges {
            self.catalog.as_slice()
        } else {
            &[]
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            is_open: self.is_open(),
            value: self.value().copied(),
            draft: self.draft().copied(),
            label: self.trigger_label(),
            can_apply: self.can_apply(),
            can_clear: self.can_clear(),
            selected_preset: self.selected_predefined_label().map(str::to_string),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// The host changed the committed value out of band.
    pub fn set_value(&mut self, value: Option<DateRange>) -> Vec<Event> {
        debug!(?value, "committed value changed externally");
        self.controller.on_external_value_change(value);
        vec![Event::ValueSynced { value }]
    }

    /// Ignored while the picker is disabled.
    pub fn open(&mut self) -> Vec<Event> {
        if self.options.disabled {
            trace!("open ignored: picker disabled");
            return Vec::new();
        }
        if !self.disclosure.open() {
            return Vec::new();
        }
        debug!("disclosure opened");
        vec![Event::DisclosureOpened]
    }

    /// Close without committing (outside click, escape).
    pub fn dismiss(&mut self) -> Vec<Event> {
        self.close(CloseReason::Dismissed)
    }

    pub fn select_draft_range(&mut self, range: Option<DateRange>) -> Vec<Event> {
        trace!(?range, "draft gesture");
        self.controller.select_draft_range(range);
        vec![Event::DraftChanged { draft: range }]
    }

    /// Select a shortcut value. Ranges that are incomplete or reversed are
    /// ignored, so auto-apply never commits them.
    pub fn select_predefined_range(&mut self, range: DateRange) -> Vec<Event> {
        if !range.is_valid() {
            trace!(?range, "predefined range ignored: incomplete or reversed");
            return Vec::new();
        }
        let commit = self
            .controller
            .select_predefined_range(range, self.options.apply_on_predefined_select);
        let mut events = vec![Event::DraftChanged { draft: Some(range) }];
        if let Some(commit) = commit {
            events.extend(self.push(commit, CloseReason::PresetApplied));
        }
        events
    }

    /// Select a shortcut by label. Unknown labels are ignored.
    pub fn select_predefined_label(&mut self, label: &str) -> Vec<Event> {
        let Some(range) = self.catalog.find(label).map(|r| r.value) else {
            trace!(label, "unknown predefined range ignored");
            return Vec::new();
        };
        self.select_predefined_range(range)
    }

    /// Commit the draft. Declined silently while the draft is invalid.
    pub fn apply(&mut self) -> Vec<Event> {
        match self.controller.apply() {
            Some(commit) => self.push(commit, CloseReason::Applied),
            None => {
                trace!(draft = ?self.draft(), "apply declined: draft incomplete or reversed");
                Vec::new()
            }
        }
    }

    pub fn clear(&mut self) -> Vec<Event> {
        let commit = self
            .controller
            .clear(self.options.clear_on_select, self.options.close_on_clear);
        let mut events = vec![Event::DraftChanged { draft: None }];
        if let Some(commit) = commit {
            events.extend(self.push(commit, CloseReason::Cleared));
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn push(&mut self, commit: Commit, reason: CloseReason) -> Vec<Event> {
        debug!(value = ?commit.value, ?reason, "range committed");
        if let Some(listener) = self.listener.as_mut() {
            listener(commit.value.as_ref());
        }
        let mut events = vec![Event::RangeCommitted {
            value: commit.value,
        }];
        if commit.close {
            events.extend(self.close(reason));
        }
        events
    }

    fn close(&mut self, reason: CloseReason) -> Vec<Event> {
        if !self.disclosure.close() {
            return Vec::new();
        }
        let draft_reset = resets_draft(reason, self.options.apply_on_predefined_select);
        if draft_reset {
            self.controller.reset_draft();
        }
        debug!(?reason, draft_reset, "disclosure closed");
        vec![Event::DisclosureClosed {
            reason,
            draft_reset,
        }]
    }
}
