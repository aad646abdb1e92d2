use std::path::Path;

use daterange_core::format_date_range;

use super::{clock, load_config};

pub fn run(
    config_path: Option<&Path>,
    now: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let catalog = config.catalog(&clock(now)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for preset in &catalog {
        let label = format_date_range(Some(&preset.value), "");
        match &preset.description {
            Some(description) => println!("{:<14} {label}  ({description})", preset.label),
            None => println!("{:<14} {label}", preset.label),
        }
    }
    Ok(())
}
