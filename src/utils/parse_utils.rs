//! String parsing helpers for configuration values and tile names

use lazy_static::lazy_static;
use regex::Regex;

use crate::plan::errors::{PlanError, PlanResult};

lazy_static! {
    // "120,210,230" or "(120, 210, 230)"
    static ref TRIPLE_PATTERN: Regex =
        Regex::new(r"^\s*\(?\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)?\s*$").unwrap();

    // tile_z{z}_x{x}_y{y}.png
    static ref TILE_NAME_PATTERN: Regex =
        Regex::new(r"^tile_z(\d+)_x(\d+)_y(\d+)\.png$").unwrap();
}

/// Parse a comma separated triple of 8-bit values
///
/// Accepts an optional pair of surrounding parentheses and arbitrary
/// whitespace around each component.
///
/// # Arguments
/// * `value` - Text such as `"120,210,230"`
///
/// # Returns
/// The three components, or an error naming the offending text
pub fn parse_triple(value: &str) -> PlanResult<[u8; 3]> {
    let captures = TRIPLE_PATTERN.captures(value).ok_or_else(|| {
        PlanError::InvalidConfig(format!("Expected three comma separated values, got '{}'", value))
    })?;

    let mut triple = [0u8; 3];
    for (slot, index) in triple.iter_mut().zip(1..=3) {
        let component = &captures[index];
        *slot = component.parse::<u8>().map_err(|_| {
            PlanError::InvalidConfig(format!("Component {} in '{}' is outside 0..=255", component, value))
        })?;
    }

    Ok(triple)
}

/// Recognize a tile file name and return its (z, x, y) address
pub fn parse_tile_name(file_name: &str) -> Option<(u32, u32, u32)> {
    let captures = TILE_NAME_PATTERN.captures(file_name)?;
    let z = captures[1].parse().ok()?;
    let x = captures[2].parse().ok()?;
    let y = captures[3].parse().ok()?;
    Some((z, x, y))
}
