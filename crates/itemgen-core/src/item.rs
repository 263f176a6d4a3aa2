//! Item entity and the per-field derivations that build it

use crate::category::{Rarity, TargetCategory};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Weight used when the column is empty or exactly "0"
pub const DEFAULT_WEIGHT: f64 = 0.5;
/// Stack size used when the column is empty
pub const DEFAULT_STACK_SIZE: i64 = 1;
/// Value used when the sell price column is empty
pub const DEFAULT_VALUE: i64 = 100;
/// Prefix prepended to every derived identifier
pub const DEFAULT_ID_PREFIX: &str = "item_";

/// A fully transformed item, ready to be emitted
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    /// Display name with double quotes escaped
    pub name: String,
    pub item_type: TargetCategory,
    pub rarity: Rarity,
    pub value: i64,
    pub weight: f64,
    pub description: String,
}

/// Derive an identifier from an item name.
///
/// Not unique: distinct names can collapse to the same id.
pub fn derive_id(prefix: &str, name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' | '-' => Some('_'),
            '(' | ')' | '.' | '\'' | '%' => None,
            other => Some(other),
        })
        .collect();

    format!("{prefix}{slug}")
}

/// Escape embedded double quotes for a string literal
pub fn escape_name(name: &str) -> String {
    name.replace('"', "\\\"")
}

/// Synthesized description from the source category
pub fn describe(raw_category: &str) -> String {
    format!("{raw_category} item")
}

/// Parse a weight. Empty, absent and the literal "0" all mean the default.
pub fn parse_weight(raw: Option<&str>, row: usize) -> Result<f64> {
    match raw {
        None | Some("") | Some("0") => Ok(DEFAULT_WEIGHT),
        Some(s) => parse_number(s, "Weight", row),
    }
}

/// Parse a stack size, defaulting when empty or absent
pub fn parse_stack_size(raw: Option<&str>, row: usize) -> Result<i64> {
    match raw {
        None | Some("") => Ok(DEFAULT_STACK_SIZE),
        Some(s) => parse_number(s, "StackSize", row),
    }
}

/// Parse a sell price, defaulting when empty or absent. A price of 0 is kept.
pub fn parse_value(raw: Option<&str>, row: usize) -> Result<i64> {
    match raw {
        None | Some("") => Ok(DEFAULT_VALUE),
        Some(s) => parse_number(s, "SellPrice", row),
    }
}

fn parse_number<T>(raw: &str, column: &str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| Error::InvalidNumber {
        row,
        column: column.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Format a weight the way the existing data files write them.
///
/// Integral values keep a trailing `.0`. Magnitudes below 1e-4 or from 1e16
/// up switch to exponent form with a signed, at least two-digit exponent
/// (`1e-05`, `1.5e+16`).
pub fn format_weight(weight: f64) -> String {
    if !weight.is_finite() || weight == 0.0 {
        return format!("{weight:.1}");
    }

    let scientific = format!("{weight:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or_default()),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= 16 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else if weight.fract() == 0.0 {
        format!("{weight:.1}")
    } else {
        weight.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_id() {
        assert_eq!(derive_id("item_", "Rusty Bolt (Used)"), "item_rusty_bolt_used");
        assert_eq!(derive_id("item_", "Anti-Grav Unit"), "item_anti_grav_unit");
        assert_eq!(derive_id("item_", "Dr. Smith's 10% Tonic"), "item_dr_smiths_10_tonic");
        assert_eq!(derive_id("gear_", "Key"), "gear_key");
    }

    #[test]
    fn test_derive_id_is_deterministic() {
        let name = "Mk. II (Blue) Shield-Cell";
        assert_eq!(derive_id("item_", name), derive_id("item_", name));
    }

    #[test]
    fn test_derive_id_collisions_are_possible() {
        assert_eq!(derive_id("item_", "Wolf-Pack"), derive_id("item_", "Wolf Pack"));
    }

    #[test]
    fn test_escape_name() {
        assert_eq!(escape_name("Plain"), "Plain");
        assert_eq!(escape_name("The \"Best\" Key"), "The \\\"Best\\\" Key");
    }

    #[test]
    fn test_weight_defaults() {
        assert_eq!(parse_weight(None, 1).unwrap(), 0.5);
        assert_eq!(parse_weight(Some(""), 1).unwrap(), 0.5);
        assert_eq!(parse_weight(Some("0"), 1).unwrap(), 0.5);
        assert_eq!(parse_weight(Some("1.5"), 1).unwrap(), 1.5);
        assert_eq!(parse_weight(Some("0.0"), 1).unwrap(), 0.0);
    }

    #[test]
    fn test_weight_malformed() {
        let err = parse_weight(Some("heavy"), 7).unwrap_err();
        match err {
            Error::InvalidNumber { row, column, value, .. } => {
                assert_eq!(row, 7);
                assert_eq!(column, "Weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_weight(Some(" "), 1).is_err());
    }

    #[test]
    fn test_value_defaults() {
        assert_eq!(parse_value(None, 1).unwrap(), 100);
        assert_eq!(parse_value(Some(""), 1).unwrap(), 100);
        assert_eq!(parse_value(Some("50"), 1).unwrap(), 50);
        assert_eq!(parse_value(Some("0"), 1).unwrap(), 0);
        assert!(parse_value(Some("12.5"), 1).is_err());
    }

    #[test]
    fn test_stack_size_defaults() {
        assert_eq!(parse_stack_size(None, 1).unwrap(), 1);
        assert_eq!(parse_stack_size(Some(""), 1).unwrap(), 1);
        assert_eq!(parse_stack_size(Some("15"), 1).unwrap(), 15);
        assert!(parse_stack_size(Some("many"), 1).is_err());
    }

    #[test]
    fn test_stack_size_accepts_any_integer() {
        assert_eq!(parse_stack_size(Some("-1"), 1).unwrap(), -1);
        assert_eq!(parse_stack_size(Some("0"), 1).unwrap(), 0);
        assert_eq!(parse_stack_size(Some("5000000000"), 1).unwrap(), 5_000_000_000);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(2.0), "2.0");
        assert_eq!(format_weight(12.25), "12.25");
        assert_eq!(format_weight(0.0), "0.0");
        assert_eq!(format_weight(0.0001), "0.0001");
        assert_eq!(format_weight(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_weight_exponent_form() {
        assert_eq!(format_weight(1e-5), "1e-05");
        assert_eq!(format_weight(2.5e-7), "2.5e-07");
        assert_eq!(format_weight(1e16), "1e+16");
        assert_eq!(format_weight(1.5e16), "1.5e+16");
        assert_eq!(format_weight(1e100), "1e+100");
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("Basic Material"), "Basic Material item");
    }
}
