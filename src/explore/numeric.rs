//! Number extraction from free-text fields ("3 miles", "$3.89")

use regex::Regex;
use std::sync::LazyLock;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("number pattern is valid"));

/// First decimal number appearing anywhere in `text`. Units are not checked.
#[must_use]
pub fn first_number(text: &str) -> Option<f64> {
    FIRST_NUMBER
        .find(text)
        .and_then(|found| found.as_str().parse().ok())
}

/// [`first_number`] over an optional field
#[must_use]
pub fn first_number_in(text: Option<&str>) -> Option<f64> {
    text.and_then(first_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3 miles", Some(3.0))]
    #[case("$3.89", Some(3.89))]
    #[case("about 12.5 mi (45 min)", Some(12.5))]
    #[case("1,234 miles", Some(1.0))]
    #[case("3.", Some(3.0))]
    #[case("NA", None)]
    #[case("", None)]
    #[case("-4", Some(4.0))]
    #[case("\u{0663} or 5 miles", Some(5.0))]
    fn test_first_number(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(first_number(text), expected);
    }

    #[test]
    fn test_first_number_in_absent() {
        assert_eq!(first_number_in(None), None);
        assert_eq!(first_number_in(Some("$4.50/gal")), Some(4.5));
    }
}
