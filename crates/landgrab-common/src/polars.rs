//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, missing-value detection and numeric parsing.

use polars::prelude::AnyValue;

/// Cell texts treated as "no value" in addition to an empty or blank cell.
///
/// These are the markers spreadsheet exports and pandas-style tooling write for
/// missing data, compared case-sensitively after trimming.
pub const MISSING_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A", "#NA",
    "<NA>",
];

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`. Floats always keep a decimal point
/// (see [`format_float`]) and booleans render as `True` / `False`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use landgrab_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(1914)), "1914");
/// assert_eq!(any_to_string(AnyValue::Float64(10000.0)), "10000.0");
/// assert_eq!(any_to_string(AnyValue::Boolean(true)), "True");
/// assert_eq!(any_to_string(AnyValue::String("$1,234.50")), "$1,234.50");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        // For any other type, use Display but strip outer quotes if present
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Returns true when the text denotes a missing value.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Formats a floating-point number in plain decimal notation with a decimal point.
///
/// Integer-valued floats keep a trailing `.0` so that float columns stay
/// distinguishable from integer columns in the written file. NaN renders as
/// an empty string, the same as a null cell.
///
/// # Examples
///
/// ```
/// use landgrab_common::format_float;
///
/// assert_eq!(format_float(10000.0), "10000.0");
/// assert_eq!(format_float(1234.56), "1234.56");
/// assert_eq!(format_float(-0.5), "-0.5");
/// assert_eq!(format_float(f64::NAN), "");
/// ```
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return String::new();
    }
    let s = format!("{v}");
    if v.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_integers() {
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1.0");
        assert_eq!(any_to_string(AnyValue::Float32(2.5)), "2.5");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "True");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "False");
    }

    #[test]
    fn test_is_missing_markers() {
        assert!(is_missing(""));
        assert!(is_missing(" nan "));
        assert!(is_missing("#N/A"));
        assert!(!is_missing("N"));
        assert!(!is_missing("0"));
    }

    #[test]
    fn test_format_float_large_values_stay_decimal() {
        assert_eq!(format_float(1e21), "1000000000000000000000.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(" 42 "), Some(42.0));
        assert_eq!(parse_f64("1234.56"), Some(1234.56));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("abc"), None);
    }
}
