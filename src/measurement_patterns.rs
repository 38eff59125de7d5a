//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to recognize amounts, range
//! connectors, unit tokens and notes. Every amount pattern is anchored at the
//! start of the text it is matched against.

use lazy_static::lazy_static;
use regex::Regex;

/// Unicode vulgar fractions understood by the parser and the formatter
pub const UNICODE_FRACTION_GLYPHS: &str = "½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞";

// Mixed numbers also accept the hyphenated "1-1/2" spelling
const MIXED_FRACTION_PATTERN: &str = r"^([0-9]+)(?:\s+|-)([0-9]+)[/⁄]([0-9]+)";
const SIMPLE_FRACTION_PATTERN: &str = r"^([0-9]+)[/⁄]([0-9]+)";
const DECIMAL_PATTERN: &str = r"^[0-9]*\.[0-9]+";
const INTEGER_PATTERN: &str = r"^[0-9]+";

lazy_static! {
    pub static ref MIXED_FRACTION_REGEX: Regex =
        Regex::new(MIXED_FRACTION_PATTERN).expect("Mixed fraction pattern should be valid");
    pub static ref SIMPLE_FRACTION_REGEX: Regex =
        Regex::new(SIMPLE_FRACTION_PATTERN).expect("Simple fraction pattern should be valid");
    pub static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_PATTERN).expect("Decimal pattern should be valid");
    pub static ref INTEGER_REGEX: Regex =
        Regex::new(INTEGER_PATTERN).expect("Integer pattern should be valid");
    pub static ref MIXED_UNICODE_REGEX: Regex =
        Regex::new(&format!(r"^([0-9]+)\s?([{UNICODE_FRACTION_GLYPHS}])"))
            .expect("Mixed unicode fraction pattern should be valid");
    pub static ref UNICODE_FRACTION_REGEX: Regex =
        Regex::new(&format!(r"^[{UNICODE_FRACTION_GLYPHS}]"))
            .expect("Unicode fraction pattern should be valid");

    /// Connector between the endpoints of a dash range, anchored
    pub static ref DASH_CONNECTOR_REGEX: Regex =
        Regex::new(r"^\s*[-–—]\s*").expect("Dash connector pattern should be valid");
    /// Connector between the endpoints of a word range, anchored
    pub static ref TO_CONNECTOR_REGEX: Regex =
        Regex::new(r"(?i)^\s+to\s+").expect("Word connector pattern should be valid");

    /// Two-word unit spellings, tried before single tokens
    pub static ref COMPOUND_UNIT_REGEX: Regex =
        Regex::new(r"(?i)^(fl\.?\s*oz\.?|fluid\s+ounces?)(?:\s+|$)")
            .expect("Compound unit pattern should be valid");
    /// A single alphabetic token, optionally abbreviated with a trailing period
    pub static ref UNIT_TOKEN_REGEX: Regex =
        Regex::new(r"^([A-Za-z]+\.?)(?:\s+|$)").expect("Unit token pattern should be valid");

    /// Whitespace left in front of punctuation once notes are cut out
    pub static ref SPACE_BEFORE_PUNCTUATION_REGEX: Regex =
        Regex::new(r"\s+([,;:.!?])").expect("Punctuation spacing pattern should be valid");

    /// First parenthesized run
    pub static ref NOTES_REGEX: Regex =
        Regex::new(r"\(([^()]*)\)").expect("Notes pattern should be valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_patterns_are_anchored() {
        assert!(INTEGER_REGEX.is_match("2 cups"));
        assert!(!INTEGER_REGEX.is_match("cups 2"));
        assert!(!SIMPLE_FRACTION_REGEX.is_match("a 1/2"));
    }

    #[test]
    fn test_mixed_fraction_spellings() {
        assert_eq!(MIXED_FRACTION_REGEX.find("1 1/2 cups").unwrap().as_str(), "1 1/2");
        assert_eq!(MIXED_FRACTION_REGEX.find("1-1/2 cups").unwrap().as_str(), "1-1/2");
        assert!(MIXED_FRACTION_REGEX.find("1 2 cups").is_none());
    }

    #[test]
    fn test_unicode_patterns() {
        assert_eq!(MIXED_UNICODE_REGEX.find("1½ cups").unwrap().as_str(), "1½");
        assert_eq!(MIXED_UNICODE_REGEX.find("2 ¾ cups").unwrap().as_str(), "2 ¾");
        assert!(UNICODE_FRACTION_REGEX.is_match("⅓ cup"));
    }

    #[test]
    fn test_non_ascii_digits_are_not_amounts() {
        assert!(!INTEGER_REGEX.is_match("٣ cups"));
    }

    #[test]
    fn test_unit_token_needs_boundary() {
        assert!(UNIT_TOKEN_REGEX.is_match("cups flour"));
        assert!(UNIT_TOKEN_REGEX.is_match("tbsp."));
        assert!(!UNIT_TOKEN_REGEX.is_match("cups,flour"));
        assert_eq!(
            COMPOUND_UNIT_REGEX.captures("fl. oz. milk").unwrap()[1].to_string(),
            "fl. oz."
        );
    }

    #[test]
    fn test_notes_pattern() {
        let captures = NOTES_REGEX.captures("olive oil (extra virgin)").unwrap();
        assert_eq!(&captures[1], "extra virgin");
    }
}
