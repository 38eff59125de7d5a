//! # Unit Normalizer
//!
//! Canonicalizes unit spellings (`"Tbsp."`, `"lbs"`, `"fl. oz."`) and reports
//! which measurement system a unit belongs to. Unrecognized tokens are never an
//! error here: they come back as [`CanonicalUnit::Unknown`].

use std::borrow::Cow;

use tracing::trace;

use crate::conversion_tables::{ConversionTables, PLURAL_EXCEPTIONS};
use crate::errors::ParseError;
use crate::ingredient_model::{CanonicalUnit, MeasurementSystem, Unit};
use crate::measurement_patterns::{COMPOUND_UNIT_REGEX, UNIT_TOKEN_REGEX};

/// A unit recognized at the start of some text
#[derive(Debug, Clone, PartialEq)]
pub struct UnitMatch {
    /// The recognized unit, with its original spelling as display
    pub unit: Unit,
    /// Byte length consumed, including trailing whitespace
    pub len: usize,
}

/// Resolve a raw unit spelling to its canonical unit
///
/// ```rust
/// use recipecart::conversion_tables::ConversionTables;
/// use recipecart::ingredient_model::CanonicalUnit;
/// use recipecart::unit_normalizer::normalize;
///
/// let tables = ConversionTables::standard();
/// assert_eq!(normalize("Tbsp.", &tables), CanonicalUnit::Tablespoon);
/// assert_eq!(normalize("lbs", &tables), CanonicalUnit::Pound);
/// assert_eq!(normalize("cloves", &tables), CanonicalUnit::Unknown("cloves".to_string()));
/// ```
pub fn normalize(raw: &str, tables: &ConversionTables) -> CanonicalUnit {
    let cleaned = clean_spelling(raw);
    let singular = singularize(&cleaned);

    // "tbs" is itself an abbreviation, so the exact spelling is tried first
    let canonical = tables
        .alias(&cleaned)
        .or_else(|| tables.alias(&singular))
        .cloned()
        .unwrap_or_else(|| CanonicalUnit::Unknown(cleaned.clone()));
    trace!("Normalized unit '{}' -> {:?}", raw, canonical);
    canonical
}

/// Measurement system of a canonical unit
pub fn classify_system(unit: &CanonicalUnit) -> MeasurementSystem {
    unit.system()
}

/// Recognize a known unit token at the start of `text`
///
/// The token must be followed by whitespace or the end of the text, so
/// `"cupcakes"` is not read as `cup`. Unknown tokens yield [`ParseError::NoUnit`].
pub fn match_leading_unit(text: &str, tables: &ConversionTables) -> Result<UnitMatch, ParseError> {
    let captures = COMPOUND_UNIT_REGEX
        .captures(text)
        .or_else(|| UNIT_TOKEN_REGEX.captures(text))
        .ok_or(ParseError::NoUnit)?;

    let token = captures.get(1).ok_or(ParseError::NoUnit)?.as_str();
    let len = captures.get(0).ok_or(ParseError::NoUnit)?.end();

    let canonical = normalize(token, tables);
    if !canonical.is_known() {
        return Err(ParseError::NoUnit);
    }

    Ok(UnitMatch {
        unit: Unit::new(canonical, token),
        len,
    })
}

/// Lowercase, drop abbreviation periods and collapse inner whitespace
fn clean_spelling(raw: &str) -> String {
    raw.to_lowercase()
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a trailing plural `s`, except for the spellings the alias table handles
fn singularize(word: &str) -> Cow<'_, str> {
    if PLURAL_EXCEPTIONS.contains(&word) || word.len() <= 1 {
        return Cow::Borrowed(word);
    }
    match word.strip_suffix('s') {
        Some(stem) => Cow::Owned(stem.to_string()),
        None => Cow::Borrowed(word),
    }
}
