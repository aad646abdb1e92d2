use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::range::CalendarConstraints;

/// Inbound configuration for one picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOptions {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_true")]
    pub show_predefined_ranges: bool,
    #[serde(default = "default_true")]
    pub show_calendar: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub close_on_clear: bool,
    /// Also suppresses the draft reset when the surface is dismissed.
    #[serde(default)]
    pub apply_on_predefined_select: bool,
    #[serde(default)]
    pub clear_on_select: bool,
    #[serde(default)]
    pub min_date: Option<NaiveDate>,
    #[serde(default)]
    pub max_date: Option<NaiveDate>,
    /// Calendar months shown side by side, 1 or 2.
    #[serde(default = "default_number_of_months")]
    pub number_of_months: u8,
    /// Trigger button width in pixels.
    #[serde(default = "default_trigger_width")]
    pub trigger_width: u32,
    #[serde(default)]
    pub test_id: Option<String>,
}

fn default_placeholder() -> String {
    "Pick a date range".into()
}
fn default_true() -> bool {
    true
}
fn default_number_of_months() -> u8 {
    2
}
fn default_trigger_width() -> u32 {
    300
}

impl PickerOptions {
    /// Defaults with `max_date` set to the clock's current day.
    pub fn with_clock(clock: &impl Clock) -> Self {
        Self {
            placeholder: default_placeholder(),
            show_predefined_ranges: true,
            show_calendar: true,
            disabled: false,
            close_on_clear: false,
            apply_on_predefined_select: false,
            clear_on_select: false,
            min_date: None,
            max_date: Some(clock.now().date()),
            number_of_months: default_number_of_months(),
            trigger_width: default_trigger_width(),
            test_id: None,
        }
    }

    pub fn constraints(&self) -> CalendarConstraints {
        CalendarConstraints::new(self.min_date, self.max_date)
    }

    /// # Errors
    ///
    /// Returns an error if `number_of_months` is not 1 or 2.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=2).contains(&self.number_of_months) {
            return Err(ValidationError::InvalidValue {
                field: "number_of_months".into(),
                message: format!("must be 1 or 2, got {}", self.number_of_months),
            });
        }
        Ok(())
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::with_clock(&SystemClock)
    }
}
