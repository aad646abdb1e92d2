//! Predefined shortcut ranges ("Today", "Last 7 Days", ...).
//!
//! A catalog is built once per interaction session from a single clock
//! reading. Entries are never re-evaluated afterwards, so "Today" stays the
//! same day even if the picker is left open across midnight.

mod presets;

pub use presets::{default_specs, PresetEntry, PresetSpec};

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::ValidationError;
use crate::range::{is_range_equal, DateRange};

/// A named, precomputed range offered for one-click selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedRange {
    pub label: String,
    pub value: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PredefinedRange {
    pub fn new(label: impl Into<String>, value: DateRange) -> Self {
        Self {
            label: label.into(),
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered list of shortcuts with unique labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PredefinedRangeCatalog {
    ranges: Vec<PredefinedRange>,
}

impl PredefinedRangeCatalog {
    /// Caller-supplied shortcuts, order preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share a label or an entry's value is
    /// not a valid range.
    pub fn new(ranges: Vec<PredefinedRange>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(ranges.len());
        for range in &ranges {
            if !seen.insert(range.label.as_str()) {
                return Err(ValidationError::DuplicateLabel(range.label.clone()));
            }
            if !range.value.is_valid() {
                return Err(ValidationError::InvalidRange {
                    label: range.label.clone(),
                });
            }
        }
        Ok(Self { ranges })
    }

    /// The built-in list: Today, Yesterday, Last 7 Days, Last 30 Days,
    /// This Month, Last Month.
    pub fn defaults(now: NaiveDateTime) -> Self {
        let ranges = default_specs()
            .iter()
            .filter_map(|spec| {
                spec.resolve(now)
                    .map(|value| PredefinedRange::new(spec.default_label(), value))
            })
            .collect();
        Self { ranges }
    }

    /// Resolve config-file entries at `now`.
    ///
    /// # Errors
    ///
    /// Same as [`PredefinedRangeCatalog::new`]; an entry whose spec cannot be
    /// resolved is reported as an invalid range.
    pub fn from_entries(
        entries: &[PresetEntry],
        now: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let ranges = entries
            .iter()
            .map(|entry| -> Result<PredefinedRange, ValidationError> {
                let label = entry.label();
                let value = entry
                    .range
                    .resolve(now)
                    .ok_or_else(|| ValidationError::InvalidRange {
                        label: label.clone(),
                    })?;
                Ok(PredefinedRange {
                    label,
                    value,
                    description: entry.description.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ranges)
    }

    /// The caller's list when given, otherwise the defaults at `clock.now()`.
    ///
    /// # Errors
    ///
    /// Same as [`PredefinedRangeCatalog::new`] for a caller-supplied list.
    pub fn resolve(
        custom: Option<Vec<PredefinedRange>>,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        match custom {
            Some(ranges) => Self::new(ranges),
            None => Ok(Self::defaults(clock.now())),
        }
    }

    pub fn find(&self, label: &str) -> Option<&PredefinedRange> {
        self.ranges.iter().find(|r| r.label == label)
    }

    pub fn as_slice(&self) -> &[PredefinedRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredefinedRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|r| r.label.as_str())
    }

    /// First shortcut matching `draft` at day granularity.
    pub fn selected(&self, draft: Option<&DateRange>) -> Option<&PredefinedRange> {
        self.ranges
            .iter()
            .find(|r| is_range_equal(Some(&r.value), draft))
    }
}

impl<'a> IntoIterator for &'a PredefinedRangeCatalog {
    type Item = &'a PredefinedRange;
    type IntoIter = std::slice::Iter<'a, PredefinedRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
