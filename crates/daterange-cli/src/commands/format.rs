use std::path::Path;

use daterange_core::{format_date_range, DateRange};

use super::load_config;

/// Unparseable bounds are dropped, the same way the picker treats them.
pub fn run(
    config_path: Option<&Path>,
    from: Option<&str>,
    to: Option<&str>,
    placeholder: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let placeholder = match placeholder {
        Some(text) => text,
        None => load_config(config_path)?.picker.placeholder,
    };
    let range = DateRange::from_input(from, to);
    println!("{}", format_date_range(Some(&range), &placeholder));
    Ok(())
}
