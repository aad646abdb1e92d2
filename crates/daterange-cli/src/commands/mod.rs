pub mod catalog;
pub mod config;
pub mod format;
pub mod replay;

use std::path::Path;

use daterange_core::range::parse_date_time;
use daterange_core::{Clock, Config, FixedClock, SystemClock};

/// Load the config from `path` (defaults if it does not exist yet) or from the
/// default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) if path.exists() => Ok(Config::load_from(path)?),
        Some(_) => Ok(Config::default()),
        None => Ok(Config::load()?),
    }
}

/// A clock pinned to `--now`, or to the current local time.
pub fn clock(now: Option<&str>) -> Result<FixedClock, Box<dyn std::error::Error>> {
    let at = match now {
        Some(raw) => parse_date_time(raw)?,
        None => SystemClock.now(),
    };
    Ok(FixedClock(at))
}
