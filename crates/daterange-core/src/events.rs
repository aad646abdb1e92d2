use serde::{Deserialize, Serialize};

use crate::picker::CloseReason;
use crate::range::DateRange;

/// Every state change of a picker produces an Event.
/// Hosts render from them; only `RangeCommitted` is an outbound notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The host pushed a new committed value; the draft now mirrors it.
    ValueSynced {
        value: Option<DateRange>,
    },
    /// The draft changed without committing.
    DraftChanged {
        draft: Option<DateRange>,
    },
    /// A value was pushed out to the host.
    RangeCommitted {
        value: Option<DateRange>,
    },
    DisclosureOpened,
    DisclosureClosed {
        reason: CloseReason,
        /// Unapplied edits were discarded.
        draft_reset: bool,
    },
    StateSnapshot {
        is_open: bool,
        value: Option<DateRange>,
        draft: Option<DateRange>,
        label: String,
        can_apply: bool,
        can_clear: bool,
        selected_preset: Option<String>,
    },
}

impl Event {
    /// The committed value carried by a `RangeCommitted` event.
    pub fn committed_value(&self) -> Option<Option<&DateRange>> {
        match self {
            Event::RangeCommitted { value } => Some(value.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(Event::DisclosureClosed {
            reason: CloseReason::Dismissed,
            draft_reset: true,
        })
        .unwrap();
        assert_eq!(json["type"], "DisclosureClosed");
        assert_eq!(json["reason"], "dismissed");
        assert_eq!(json["draft_reset"], true);
    }

    #[test]
    fn committed_value_only_for_commits() {
        assert_eq!(
            Event::RangeCommitted { value: None }.committed_value(),
            Some(None)
        );
        assert_eq!(Event::DisclosureOpened.committed_value(), None);
    }
}
