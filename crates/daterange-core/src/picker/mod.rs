mod controller;
mod disclosure;
mod engine;
mod options;

pub use controller::{Commit, SelectionController};
pub use disclosure::{resets_draft, CloseReason, Disclosure, DisclosureState};
pub use engine::{ChangeListener, DateRangePicker};
pub use options::PickerOptions;
