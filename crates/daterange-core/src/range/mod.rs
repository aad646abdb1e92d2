mod constraints;
mod format;
mod model;

pub use constraints::CalendarConstraints;
pub use format::{format_date, format_date_range, DISPLAY_FORMAT};
pub use model::{
    end_of_day, is_range_equal, is_valid_date_range, parse_date, parse_date_time, start_of_day,
    DateRange,
};
