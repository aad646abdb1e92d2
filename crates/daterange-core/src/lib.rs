//! # Date Range Picker Core Library
//!
//! State for a date-range selection control: a committed range owned by the
//! host, a draft the user edits, predefined shortcut ranges, and the
//! open/closed lifecycle of the picker surface. Rendering is left to the host;
//! it forwards calendar gestures and shortcut clicks into [`DateRangePicker`]
//! and renders from the returned [`Event`]s.
//!
//! ## Architecture
//!
//! - **Range Model**: pure validity, day-granularity equality and formatting
//! - **Predefined Range Catalog**: shortcuts resolved once against a [`Clock`]
//! - **Selection Controller**: draft/committed reconciliation and the apply gate
//! - **Disclosure**: open/closed state and the draft-reset policy on dismissal
//! - **Storage**: TOML configuration for picker options and custom shortcuts
//!
//! ## Key Components
//!
//! - [`DateRangePicker`]: composed picker state machine
//! - [`SelectionController`]: draft state without disclosure
//! - [`PredefinedRangeCatalog`]: ordered, uniquely-labelled shortcuts
//! - [`Config`]: configuration management

pub mod catalog;
pub mod clock;
pub mod error;
pub mod events;
pub mod picker;
pub mod range;
pub mod storage;

pub use catalog::{PredefinedRange, PredefinedRangeCatalog, PresetEntry, PresetSpec};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use picker::{
    CloseReason, Commit, DateRangePicker, Disclosure, DisclosureState, PickerOptions,
    SelectionController,
};
pub use range::{
    format_date_range, is_range_equal, is_valid_date_range, CalendarConstraints, DateRange,
};
pub use storage::Config;
