//! # Ingredient Parser
//!
//! This module splits free-form recipe lines into structured ingredients.
//! Each line goes through the same stages, each anchored to the start of what
//! the previous stage left over:
//!
//! 1. a leading amount (see [`amount_parser`](crate::amount_parser))
//! 2. a leading unit token, only after an amount was found
//! 3. the first parenthesized run, taken out as notes
//! 4. whatever remains is the ingredient name
//!
//! Parsing never fails. A line nothing can be made of comes back with the
//! whole text as the name.
//!
//! ## Usage
//!
//! ```rust
//! use recipecart::config::EngineConfig;
//! use recipecart::conversion_tables::ConversionTables;
//! use recipecart::ingredient_parser::parse_ingredient_list;
//!
//! let tables = ConversionTables::standard();
//! let text = "2 cups flour\n\n1 tbsp salt\n1/2 tsp pepper";
//! let parsed = parse_ingredient_list(text, &tables, &EngineConfig::default());
//!
//! assert_eq!(parsed.len(), 3);
//! for ingredient in &parsed.ingredients {
//!     println!("{}", ingredient);
//! }
//! ```

use tracing::{debug, info};

use crate::amount_parser::match_leading;
use crate::config::EngineConfig;
use crate::conversion_tables::ConversionTables;
use crate::ingredient_model::{Ingredient, IngredientList};
use crate::measurement_patterns::{NOTES_REGEX, SPACE_BEFORE_PUNCTUATION_REGEX};
use crate::unit_normalizer::match_leading_unit;

/// Parse a full ingredient list, one ingredient per non-blank line
pub fn parse_ingredient_list(
    text: &str,
    tables: &ConversionTables,
    config: &EngineConfig,
) -> IngredientList {
    let mut list = IngredientList::new(text.to_string());

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        list.add_ingredient(parse_line(line, tables, config));
    }

    info!(
        "Parsed {} ingredient lines ({} with amounts)",
        list.len(),
        list.quantified_count()
    );
    list
}

/// Parse a single ingredient line
pub fn parse_line(text: &str, tables: &ConversionTables, config: &EngineConfig) -> Ingredient {
    let mut rest = text.trim();
    let mut ingredient = Ingredient::new("").with_original_text(text);

    if let Some(amount) = match_leading(rest, tables) {
        ingredient = ingredient
            .with_quantity(amount.quantity)
            .with_amount(amount.text(rest));
        rest = rest[amount.len..].trim_start();

        if let Ok(unit) = match_leading_unit(rest, tables) {
            ingredient = ingredient.with_unit(unit.unit);
            rest = &rest[unit.len..];
        }
    }

    let (remainder, notes) = extract_notes(rest);
    if let Some(notes) = notes {
        ingredient = ingredient.with_notes(&notes);
    }

    ingredient.name = if config.clean_names {
        clean_name(&remainder)
    } else {
        collapse_whitespace(&remainder)
    };

    debug!(
        "Parsed '{}' -> amount={:?} unit={:?} name='{}' notes={:?}",
        text,
        ingredient.amount,
        ingredient.unit.as_ref().map(|u| u.name()),
        ingredient.name,
        ingredient.notes
    );
    ingredient
}

/// Take the first parenthesized run out of `text`
///
/// Returns the text without it, and its trimmed content. Empty parentheses are
/// removed but yield no notes.
pub fn extract_notes(text: &str) -> (String, Option<String>) {
    let Some(captures) = NOTES_REGEX.captures(text) else {
        return (text.to_string(), None);
    };
    let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
        return (text.to_string(), None);
    };

    let remainder = format!("{} {}", &text[..whole.start()], &text[whole.end()..]);
    let notes = inner.as_str().trim();
    let notes = (!notes.is_empty()).then(|| notes.to_string());
    (remainder, notes)
}

/// Tidy an ingredient name: collapse whitespace, close up space before
/// punctuation, drop a leading "of " and trailing commas or semicolons
///
/// ```rust
/// use recipecart::ingredient_parser::clean_name;
///
/// assert_eq!(clean_name("of  chopped   parsley,"), "chopped parsley");
/// assert_eq!(clean_name("walnuts  , chopped"), "walnuts, chopped");
/// ```
pub fn clean_name(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let collapsed = SPACE_BEFORE_PUNCTUATION_REGEX.replace_all(&collapsed, "$1");
    let trimmed = collapsed.trim_end_matches([',', ';']).trim_end();
    let name = match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("of ") => &trimmed[3..],
        _ => trimmed,
    };
    name.trim().to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
