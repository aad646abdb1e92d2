//! Open/closed lifecycle of the picker surface.
//!
//! ## State Transitions
//!
//! ```text
//! Closed -> Open -> Closed
//! ```
//!
//! Validity never blocks a transition. What happens to the draft on close
//! depends on why the surface closed, see [`resets_draft`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureState {
    #[default]
    Closed,
    Open,
}

/// Why the surface closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Apply succeeded.
    Applied,
    /// A shortcut was picked with auto-apply on.
    PresetApplied,
    /// Clear committed the empty value with close-on-clear on.
    Cleared,
    /// Outside click, escape, or any other close request.
    Dismissed,
}

impl CloseReason {
    /// The close followed a commit, so the draft already equals the new value.
    pub fn is_commit(self) -> bool {
        !matches!(self, CloseReason::Dismissed)
    }
}

/// Whether closing for `reason` discards the draft.
///
/// Only a dismissal resets, and only while auto-apply on shortcut select is
/// off. With auto-apply on, a dismissed draft is kept as-is.
pub fn resets_draft(reason: CloseReason, apply_on_predefined_select: bool) -> bool {
    !reason.is_commit() && !apply_on_predefined_select
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    state: DisclosureState,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DisclosureState::Open
    }

    /// Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        self.transition(DisclosureState::Open)
    }

    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        self.transition(DisclosureState::Closed)
    }

    fn transition(&mut self, to: DisclosureState) -> bool {
        let changed = self.state != to;
        self.state = to;
        changed
    }
}
