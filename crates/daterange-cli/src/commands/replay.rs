//! Drive a picker from a scripted list of gestures.
//!
//! Script format (JSON array):
//!
//! ```json
//! [
//!   { "action": "set_value", "from": "2024-01-01", "to": "2024-01-07" },
//!   { "action": "open" },
//!   { "action": "draft", "from": "2024-02-01" },
//!   { "action": "draft", "from": "2024-02-01", "to": "2024-02-09" },
//!   { "action": "preset", "label": "Last 7 Days" },
//!   { "action": "apply" },
//!   { "action": "clear" },
//!   { "action": "dismiss" }
//! ]
//! ```
//!
//! By default the replay acts as a host that accepts every commit: each
//! committed value is passed back through `set_value`, which shows up as a
//! `ValueSynced` event right after the `RangeCommitted` one.

use std::path::Path;
use std::sync::{Arc, Mutex};

use daterange_core::{DateRange, DateRangePicker, Event};
use serde::{Deserialize, Serialize};

use super::{clock, load_config};

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Gesture {
    SetValue {
        from: Option<String>,
        to: Option<String>,
    },
    Open,
    Dismiss,
    Draft {
        from: Option<String>,
        to: Option<String>,
    },
    Preset {
        label: String,
    },
    Apply,
    Clear,
}

#[derive(Serialize)]
struct ReplayReport {
    events: Vec<Event>,
    /// Every value the change listener received, in order.
    committed: Vec<Option<DateRange>>,
    snapshot: Event,
}

/// Both bounds missing means "no selection".
fn range(from: Option<&str>, to: Option<&str>) -> Option<DateRange> {
    if from.is_none() && to.is_none() {
        return None;
    }
    Some(DateRange::from_input(from, to))
}

pub fn run(
    config_path: Option<&Path>,
    script: &Path,
    now: Option<&str>,
    echo: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let gestures: Vec<Gesture> = serde_json::from_str(&std::fs::read_to_string(script)?)?;

    let config = load_config(config_path)?;
    let clock = clock(now)?;
    let options = config.picker_options(&clock)?;
    let catalog = config.catalog(&clock)?;

    let committed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&committed);
    let mut picker = DateRangePicker::new(options, catalog, None).with_listener(move |value| {
        if let Ok(mut seen) = sink.lock() {
            seen.push(value.copied());
        }
    });

    let mut events = Vec::new();
    for gesture in gestures {
        tracing::debug!(?gesture, "replaying gesture");
        let produced = match gesture {
            Gesture::SetValue { from, to } => {
                picker.set_value(range(from.as_deref(), to.as_deref()))
            }
            Gesture::Open => picker.open(),
            Gesture::Dismiss => picker.dismiss(),
            Gesture::Draft { from, to } => {
                picker.select_draft_range(range(from.as_deref(), to.as_deref()))
            }
            Gesture::Preset { label } => picker.select_predefined_label(&label),
            Gesture::Apply => picker.apply(),
            Gesture::Clear => picker.clear(),
        };
        let accepted = produced
            .iter()
            .filter_map(Event::committed_value)
            .last()
            .map(|value| value.copied());
        events.extend(produced);
        if let Some(value) = accepted.filter(|_| echo) {
            events.extend(picker.set_value(value));
        }
    }

    let committed = committed
        .lock()
        .map(|seen| seen.clone())
        .map_err(|_| "change listener panicked")?;
    let report = ReplayReport {
        events,
        committed,
        snapshot: picker.snapshot(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
