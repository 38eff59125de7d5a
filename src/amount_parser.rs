//! # Amount Parser
//!
//! Turns the leading quantity of a piece of text into a [`Quantity`].
//!
//! Each recognizable spelling is an [`AmountStrategy`]. Strategies are tried in
//! priority order against the start of the text; the longest match wins and
//! ties go to the earlier strategy. Range strategies reuse the scalar
//! strategies for both endpoints, so `"1 1/2 - 2"` and `"½ to ¾"` work.
//!
//! ```rust
//! use recipecart::amount_parser::parse;
//! use recipecart::conversion_tables::ConversionTables;
//! use recipecart::ingredient_model::Quantity;
//!
//! let tables = ConversionTables::standard();
//! assert_eq!(parse("1 1/2", &tables), Ok(Quantity::Scalar(1.5)));
//! assert_eq!(parse("3 to 4", &tables), Ok(Quantity::Range { min: 3.0, max: 4.0 }));
//! ```

use regex::{Captures, Regex};
use tracing::{trace, warn};

use crate::conversion_tables::ConversionTables;
use crate::errors::ParseError;
use crate::ingredient_model::Quantity;
use crate::measurement_patterns::{
    DASH_CONNECTOR_REGEX, DECIMAL_REGEX, INTEGER_REGEX, MIXED_FRACTION_REGEX,
    MIXED_UNICODE_REGEX, SIMPLE_FRACTION_REGEX, TO_CONNECTOR_REGEX, UNICODE_FRACTION_REGEX,
};

/// One way of spelling an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStrategy {
    /// "1 1/2", "1-1/2"
    MixedFraction,
    /// "3/4"
    SimpleFraction,
    /// "1.5", ".5"
    Decimal,
    /// "2"
    Integer,
    /// "1½", "1 ½"
    MixedUnicode,
    /// "½"
    UnicodeFraction,
    /// "1-2", "1 - 2"
    DashRange,
    /// "1 to 2"
    WordRange,
}

impl AmountStrategy {
    /// Every strategy, in priority order
    pub const ORDERED: [AmountStrategy; 8] = [
        AmountStrategy::MixedFraction,
        AmountStrategy::SimpleFraction,
        AmountStrategy::Decimal,
        AmountStrategy::Integer,
        AmountStrategy::MixedUnicode,
        AmountStrategy::UnicodeFraction,
        AmountStrategy::DashRange,
        AmountStrategy::WordRange,
    ];

    /// Strategies that produce a single value
    pub const SCALAR: [AmountStrategy; 6] = [
        AmountStrategy::MixedFraction,
        AmountStrategy::SimpleFraction,
        AmountStrategy::Decimal,
        AmountStrategy::Integer,
        AmountStrategy::MixedUnicode,
        AmountStrategy::UnicodeFraction,
    ];

    /// Try this strategy against the start of `text`
    pub fn try_match(self, text: &str, tables: &ConversionTables) -> Option<AmountMatch> {
        let matched = match self {
            AmountStrategy::MixedFraction => captures_at_start(&MIXED_FRACTION_REGEX, text)
                .and_then(|(caps, len)| {
                    let whole = number(&caps, 1)?;
                    let fraction = ratio(number(&caps, 2)?, number(&caps, 3)?)?;
                    Some((Quantity::Scalar(whole + fraction), len))
                }),
            AmountStrategy::SimpleFraction => captures_at_start(&SIMPLE_FRACTION_REGEX, text)
                .and_then(|(caps, len)| {
                    let value = ratio(number(&caps, 1)?, number(&caps, 2)?)?;
                    Some((Quantity::Scalar(value), len))
                }),
            AmountStrategy::Decimal => scalar_at_start(&DECIMAL_REGEX, text),
            AmountStrategy::Integer => scalar_at_start(&INTEGER_REGEX, text),
            AmountStrategy::MixedUnicode => captures_at_start(&MIXED_UNICODE_REGEX, text)
                .and_then(|(caps, len)| {
                    let whole = number(&caps, 1)?;
                    let glyph = caps.get(2)?.as_str().chars().next()?;
                    let fraction = tables.unicode_value(glyph)?;
                    Some((Quantity::Scalar(whole + fraction), len))
                }),
            AmountStrategy::UnicodeFraction => UNICODE_FRACTION_REGEX.find(text).and_then(|m| {
                let glyph = m.as_str().chars().next()?;
                let value = tables.unicode_value(glyph)?;
                Some((Quantity::Scalar(value), m.end()))
            }),
            AmountStrategy::DashRange | AmountStrategy::WordRange => {
                self.split_range(text, tables).map(|split| {
                    if split.min > split.max {
                        warn!("Reversed range '{}', swapping endpoints", text);
                    }
                    (Quantity::range(split.min, split.max), split.len())
                })
            }
        };

        let (quantity, len) = matched?;
        trace!("Strategy {:?} matched '{}'", self, &text[..len]);
        Some(AmountMatch {
            quantity,
            len,
            strategy: self,
        })
    }

    /// Split a range at the start of `text` into its endpoints and connector
    ///
    /// The left endpoint is the longest scalar match, so the hyphen of a mixed
    /// number like `"1-1/2 to 2"` is never taken for the connector. Returns
    /// `None` for scalar strategies.
    pub fn split_range<'t>(self, text: &'t str, tables: &ConversionTables) -> Option<RangeSplit<'t>> {
        let connector: &Regex = match self {
            AmountStrategy::DashRange => &*DASH_CONNECTOR_REGEX,
            AmountStrategy::WordRange => &*TO_CONNECTOR_REGEX,
            _ => return None,
        };
        let left = longest_match(&AmountStrategy::SCALAR, text, tables)?;
        let rest = &text[left.len..];
        let joint = connector.find(rest)?;
        let right_text = &rest[joint.end()..];
        let right = longest_match(&AmountStrategy::SCALAR, right_text, tables)?;

        Some(RangeSplit {
            min_text: left.text(text),
            connector: joint.as_str(),
            max_text: right.text(right_text),
            min: left.quantity.estimated_value(),
            max: right.quantity.estimated_value(),
        })
    }
}

/// A range amount split where the parser split it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSplit<'t> {
    /// Text of the first endpoint as written
    pub min_text: &'t str,
    /// Connector exactly as written (e.g., "-", " - ", " to ")
    pub connector: &'t str,
    /// Text of the second endpoint as written
    pub max_text: &'t str,
    /// Value of the first endpoint
    pub min: f64,
    /// Value of the second endpoint
    pub max: f64,
}

impl RangeSplit<'_> {
    /// Byte length of the whole range text
    pub fn len(&self) -> usize {
        self.min_text.len() + self.connector.len() + self.max_text.len()
    }
}

/// A successful amount match at the start of some text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountMatch {
    /// The parsed value
    pub quantity: Quantity,
    /// Byte length of the matched prefix
    pub len: usize,
    /// Strategy that produced the match
    pub strategy: AmountStrategy,
}

impl AmountMatch {
    /// The matched prefix of `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[..self.len]
    }
}

/// Parse the leading amount of `text`
///
/// Leading whitespace is ignored. Text after the amount is ignored as well, so
/// `parse("2 eggs")` yields `Scalar(2.0)`.
pub fn parse(text: &str, tables: &ConversionTables) -> Result<Quantity, ParseError> {
    match_leading(text.trim_start(), tables)
        .map(|m| m.quantity)
        .ok_or(ParseError::NoAmount)
}

/// Longest amount match at the very start of `text`, across all strategies
pub fn match_leading(text: &str, tables: &ConversionTables) -> Option<AmountMatch> {
    longest_match(&AmountStrategy::ORDERED, text, tables)
}

/// Longest match among `strategies`; on equal length the earlier strategy wins
pub fn longest_match(
    strategies: &[AmountStrategy],
    text: &str,
    tables: &ConversionTables,
) -> Option<AmountMatch> {
    strategies
        .iter()
        .filter_map(|strategy| strategy.try_match(text, tables))
        .fold(None, |best: Option<AmountMatch>, candidate| match best {
            Some(current) if current.len >= candidate.len => Some(current),
            _ => Some(candidate),
        })
}

fn captures_at_start<'t>(regex: &Regex, text: &'t str) -> Option<(Captures<'t>, usize)> {
    let caps = regex.captures(text)?;
    let len = caps.get(0)?.end();
    Some((caps, len))
}

fn scalar_at_start(regex: &Regex, text: &str) -> Option<(Quantity, usize)> {
    let m = regex.find(text)?;
    let value: f64 = m.as_str().parse().ok()?;
    Some((Quantity::Scalar(value), m.end()))
}

fn number(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
