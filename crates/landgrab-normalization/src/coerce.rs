//! Cell-level conversion rules.
//!
//! Each function takes one cell's text and returns the converted value, or
//! `None` when the text is outside the rule's domain. Callers turn `None`
//! into [`crate::NormalizationError::InvalidValue`].

use landgrab_common::{is_missing, parse_f64};

/// Characters removed from currency text before parsing.
pub const CURRENCY_SYMBOLS: [char; 2] = ['$', ','];

/// Year assigned to a missing year cell.
pub const UNKNOWN_YEAR: i64 = 0;

/// Removes every `$` and `,` from the text.
///
/// # Examples
///
/// ```
/// use landgrab_normalization::coerce::strip_currency;
///
/// assert_eq!(strip_currency("$1,234.50"), "1234.50");
/// assert_eq!(strip_currency("42"), "42");
/// ```
pub fn strip_currency(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !CURRENCY_SYMBOLS.contains(ch))
        .collect()
}

/// Parses currency text such as `"$10,000"` as a float.
///
/// A missing cell has no numeric placeholder and does not parse, even behind
/// a symbol (`"$NaN"`). Infinite amounts are rejected.
pub fn parse_currency(value: &str) -> Option<f64> {
    let stripped = strip_currency(value);
    if is_missing(&stripped) {
        return None;
    }
    parse_f64(&stripped).filter(|amount| amount.is_finite())
}

/// Maps exactly `"Y"` to `true` and `"N"` to `false`; anything else,
/// including padded markers such as `" N"`, is rejected.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// Parses a year, treating a missing cell as [`UNKNOWN_YEAR`].
///
/// Fractional values truncate toward zero (`"1914.9"` is 1914). Values that
/// do not fit an `i64` are rejected rather than saturated.
pub fn parse_year(value: &str) -> Option<i64> {
    if is_missing(value) {
        return Some(UNKNOWN_YEAR);
    }
    let truncated = parse_f64(value)?.trunc();
    if !(i64::MIN as f64..i64::MAX as f64).contains(&truncated) {
        return None;
    }
    Some(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn currency_strips_symbols() {
        assert_eq!(parse_currency("$1,234.56"), Some(1234.56));
        assert_eq!(parse_currency("$10,000"), Some(10000.0));
        assert_eq!(parse_currency("42"), Some(42.0));
        assert_eq!(parse_currency(" $5 "), Some(5.0));
        assert_eq!(parse_currency("-$7.25"), Some(-7.25));
    }

    #[test]
    fn currency_rejects_missing_and_text() {
        assert_eq!(parse_currency(""), None);
        assert_eq!(parse_currency("NA"), None);
        assert_eq!(parse_currency("$"), None);
        assert_eq!(parse_currency("unknown"), None);
        assert_eq!(parse_currency("$NaN"), None);
        assert_eq!(parse_currency("$nan"), None);
        assert_eq!(parse_currency("$,"), None);
        assert_eq!(parse_currency("$inf"), None);
        assert_eq!(parse_currency("-$inf"), None);
    }

    #[test]
    fn flags_map_exactly() {
        assert_eq!(parse_flag("Y"), Some(true));
        assert_eq!(parse_flag("N"), Some(false));
    }

    #[test]
    fn flags_reject_other_values() {
        assert_eq!(parse_flag("y"), None);
        assert_eq!(parse_flag("Yes"), None);
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("0"), None);
        assert_eq!(parse_flag(" N"), None);
        assert_eq!(parse_flag("Y "), None);
    }

    #[test]
    fn years_fill_and_truncate() {
        assert_eq!(parse_year(""), Some(0));
        assert_eq!(parse_year("NaN"), Some(0));
        assert_eq!(parse_year("1914"), Some(1914));
        assert_eq!(parse_year("1914.0"), Some(1914));
        assert_eq!(parse_year("1862.9"), Some(1862));
    }

    #[test]
    fn years_reject_text() {
        assert_eq!(parse_year("circa 1900"), None);
        assert_eq!(parse_year("inf"), None);
    }

    #[test]
    fn years_reject_out_of_range() {
        assert_eq!(parse_year("1e30"), None);
        assert_eq!(parse_year("-1e30"), None);
        assert_eq!(parse_year("9223372036854775808"), None);
        assert_eq!(parse_year("-2000"), Some(-2000));
    }

    proptest! {
        #[test]
        fn formatted_dollars_parse_back(cents in 0u64..10_000_000_000) {
            let dollars = cents / 100;
            let remainder = cents % 100;
            let mut grouped = String::new();
            let digits = dollars.to_string();
            for (idx, ch) in digits.chars().enumerate() {
                if idx > 0 && (digits.len() - idx) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(ch);
            }
            let text = format!("${grouped}.{remainder:02}");
            let expected: f64 = format!("{dollars}.{remainder:02}").parse().unwrap();
            prop_assert_eq!(parse_currency(&text), Some(expected));
        }

        #[test]
        fn whole_years_round_trip(year in 0i64..3000) {
            prop_assert_eq!(parse_year(&year.to_string()), Some(year));
            prop_assert_eq!(parse_year(&format!("{year}.0")), Some(year));
        }
    }
}
