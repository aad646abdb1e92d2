//! Draft/committed reconciliation.
//!
//! The controller owns the draft and mirrors the host's committed value. Its
//! operations never fail: an invalid draft simply cannot be applied. When an
//! operation decides that the draft becomes the committed value it returns a
//! [`Commit`] describing the outbound notification.
//!
//! The mirror is written only by [`SelectionController::on_external_value_change`].
//! A commit is a request to the host; until the host echoes the value back,
//! the mirror keeps the previous value.

use serde::{Deserialize, Serialize};

use crate::range::{is_range_equal, is_valid_date_range, DateRange};

/// A value to push to the host, plus whether the surface should close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub value: Option<DateRange>,
    pub close: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionController {
    committed: Option<DateRange>,
    draft: Option<DateRange>,
}

impl SelectionController {
    /// Seeded from the host's committed value.
    pub fn new(committed: Option<DateRange>) -> Self {
        Self {
            committed,
            draft: committed,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn committed(&self) -> Option<&DateRange> {
        self.committed.as_ref()
    }

    pub fn draft(&self) -> Option<&DateRange> {
        self.draft.as_ref()
    }

    /// Mirrors the gate in [`SelectionController::apply`] exactly.
    pub fn can_apply(&self) -> bool {
        self.draft.is_none() || is_valid_date_range(self.draft.as_ref())
    }

    pub fn can_clear(&self) -> bool {
        self.draft.is_some()
    }

    /// Whether `candidate` is the draft, at day granularity.
    pub fn is_predefined_range_selected(&self, candidate: &DateRange) -> bool {
        is_range_equal(Some(candidate), self.draft.as_ref())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// The host changed the committed value out of band.
    ///
    /// Overwrites the draft unconditionally, discarding unapplied edits.
    pub fn on_external_value_change(&mut self, committed: Option<DateRange>) {
        self.committed = committed;
        self.draft = committed;
    }

    /// In-progress calendar gesture. Stored verbatim, partial or reversed.
    pub fn select_draft_range(&mut self, range: Option<DateRange>) {
        self.draft = range;
    }

    /// Shortcut click. Commits immediately when `apply_on_select` is set.
    ///
    /// A range that is not valid is ignored and leaves the draft untouched.
    pub fn select_predefined_range(&mut self, range: DateRange, apply_on_select: bool) -> Option<Commit> {
        if !range.is_valid() {
            return None;
        }
        self.draft = Some(range);
        if apply_on_select {
            Some(Self::commit(Some(range), true))
        } else {
            None
        }
    }

    /// Commit the draft if it is absent or valid; otherwise decline.
    pub fn apply(&mut self) -> Option<Commit> {
        if !self.can_apply() {
            return None;
        }
        Some(Self::commit(self.draft, true))
    }

    /// Drop the draft. With `clear_on_select` the empty value is committed
    /// right away, closing the surface when `close_on_clear` is also set.
    pub fn clear(&mut self, clear_on_select: bool, close_on_clear: bool) -> Option<Commit> {
        self.draft = None;
        if clear_on_select {
            Some(Self::commit(None, close_on_clear))
        } else {
            None
        }
    }

    /// Discard unapplied edits.
    pub fn reset_draft(&mut self) {
        self.draft = self.committed;
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn commit(value: Option<DateRange>, close: bool) -> Commit {
        Commit { value, close }
    }
}
