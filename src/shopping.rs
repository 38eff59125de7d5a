//! # Shopping Helpers
//!
//! Turns parsed ingredients into what a grocery search or cart needs: a bare
//! product search term, a whole item count, and a guess at which measurement
//! system the recipe was written in.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::ingredient_model::{Ingredient, MeasurementSystem, Quantity};
use crate::measurement_patterns::UNICODE_FRACTION_GLYPHS;

lazy_static! {
    static ref PARENTHESIZED_REGEX: Regex =
        Regex::new(r"\([^()]*\)|\[[^\[\]]*\]").expect("Parenthesized pattern should be valid");
    static ref NUMBER_REGEX: Regex = Regex::new(&format!(
        r"[0-9]+(?:\s+[0-9]+)?(?:[/⁄.][0-9]+)?|[{UNICODE_FRACTION_GLYPHS}]"
    ))
    .expect("Number pattern should be valid");
    static ref PUNCTUATION_REGEX: Regex =
        Regex::new(r#"[()\[\]{},;:'"!?]"#).expect("Punctuation pattern should be valid");
    static ref MEASUREMENT_WORD_REGEX: Regex = Regex::new(
        r"(?i)\b(?:cups?|tablespoons?|tbsp|teaspoons?|tsp|ounces?|oz|pounds?|lbs?|grams?|g|kg|ml|l)\b"
    )
    .expect("Measurement word pattern should be valid");
}

/// Product search term for an ingredient name
///
/// ```rust
/// use recipecart::shopping::search_term;
///
/// assert_eq!(search_term("2 cups chopped tomatoes (about 3)"), "chopped tomatoes");
/// ```
pub fn search_term(name: &str) -> String {
    let text = PARENTHESIZED_REGEX.replace_all(name, " ");
    let text = NUMBER_REGEX.replace_all(&text, " ");
    let text = PUNCTUATION_REGEX.replace_all(&text, " ");
    let text = MEASUREMENT_WORD_REGEX.replace_all(&text, " ");
    let term = text.split_whitespace().collect::<Vec<_>>().join(" ");
    debug!("Search term for '{}' -> '{}'", name, term);
    term
}

/// Number of items to put in a cart for this ingredient
///
/// Only whole-number scalar amounts count: they are multiplied and rounded,
/// with a floor of one item. Fractions, ranges and missing amounts give 1.
pub fn cart_quantity(ingredient: &Ingredient, multiplier: f64) -> u32 {
    let multiplier = if multiplier.is_finite() && multiplier > 0.0 {
        multiplier
    } else {
        1.0
    };
    match ingredient.quantity {
        Some(Quantity::Scalar(value)) if value.fract() == 0.0 && value <= u32::MAX as f64 => {
            (value * multiplier).round().clamp(1.0, u32::MAX as f64) as u32
        }
        _ => 1,
    }
}

/// Guess the measurement system a recipe is written in
///
/// Majority vote over the units that belong to a system. Ties, including a
/// recipe with no measured units at all, go to US customary.
pub fn infer_measurement_system(ingredients: &[Ingredient]) -> MeasurementSystem {
    let (us, metric) = ingredients
        .iter()
        .fold((0usize, 0usize), |(us, metric), ingredient| match ingredient.system() {
            MeasurementSystem::Us => (us + 1, metric),
            MeasurementSystem::Metric => (us, metric + 1),
            MeasurementSystem::Unknown => (us, metric),
        });
    debug!("Measurement system votes: us={} metric={}", us, metric);

    if metric > us {
        MeasurementSystem::Metric
    } else {
        MeasurementSystem::Us
    }
}
