//! Per-field cleaning and coercion for CSV cells
//!
//! Nothing here fails: anything that does not clean up to a value becomes `None`.

use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Cell values that mean "no data"
const NULL_MARKERS: [&str; 3] = ["", "?", "NA"];

/// Trim a cell and map the null markers to `None`.
#[must_use]
pub fn clean_empty(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if NULL_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Integer with thousands separators allowed ("1,234" → 1234).
#[must_use]
pub fn parse_int(value: Option<&str>) -> Option<i32> {
    clean_empty(value)?.replace(',', "").parse().ok()
}

/// Fixed-point decimal ("7.25" → 7.25).
#[must_use]
pub fn parse_decimal(value: Option<&str>) -> Option<BigDecimal> {
    BigDecimal::from_str(&clean_empty(value)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   "), None)]
    #[case(Some("?"), None)]
    #[case(Some(" NA "), None)]
    #[case(Some("na"), Some("na"))]
    #[case(Some(" Sarasota "), Some("Sarasota"))]
    fn test_clean_empty(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(clean_empty(input).as_deref(), expected);
    }

    #[rstest]
    #[case(Some("42"), Some(42))]
    #[case(Some("1,234"), Some(1234))]
    #[case(Some(" -7 "), Some(-7))]
    #[case(Some("12.5"), None)]
    #[case(Some("abc"), None)]
    #[case(Some("NA"), None)]
    #[case(None, None)]
    fn test_parse_int(#[case] input: Option<&str>, #[case] expected: Option<i32>) {
        assert_eq!(parse_int(input), expected);
    }

    #[rstest]
    #[case(Some("7.25"), Some("7.25"))]
    #[case(Some("0"), Some("0"))]
    #[case(Some("6%"), None)]
    #[case(Some("?"), None)]
    #[case(None, None)]
    fn test_parse_decimal(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            parse_decimal(input),
            expected.map(|text| BigDecimal::from_str(text).unwrap())
        );
    }
}
