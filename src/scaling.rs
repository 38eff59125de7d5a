//! # Scaling Engine
//!
//! Applies a serving multiplier to a parsed ingredient. The scaled amount is
//! re-rendered in the style of the original amount text, and ranges keep the
//! connector they were written with (`"3-4"` doubles to `"6-8"`, `"1 to 2"` to
//! `"2 to 4"`).

use tracing::{debug, warn};

use crate::amount_formatter::{format, format_styled, AmountStyle};
use crate::amount_parser::match_leading;
use crate::conversion_tables::ConversionTables;
use crate::ingredient_model::{Ingredient, Quantity, Unit};

const DEFAULT_CONNECTOR: &str = "-";

/// The pieces of a range amount string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeParts<'a> {
    /// Text of the lower endpoint, if known
    pub min_text: Option<&'a str>,
    /// Connector exactly as written (e.g., "-", " - ", " to ")
    pub connector: &'a str,
    /// Text of the upper endpoint, if known
    pub max_text: Option<&'a str>,
}

impl<'a> RangeParts<'a> {
    /// Split a range amount string where the amount parser splits it
    ///
    /// Without amount text, or when the text does not parse as a range, the
    /// endpoints are unknown and the connector defaults to `"-"`. Reversed
    /// ranges hand their endpoint texts back in ascending order.
    pub fn detect(amount_text: Option<&'a str>, tables: &ConversionTables) -> Self {
        let split = amount_text.and_then(|text| {
            let amount = match_leading(text, tables)?;
            amount.strategy.split_range(text, tables)
        });
        match split {
            Some(split) if split.min > split.max => Self {
                min_text: Some(split.max_text),
                connector: split.connector,
                max_text: Some(split.min_text),
            },
            Some(split) => Self {
                min_text: Some(split.min_text),
                connector: split.connector,
                max_text: Some(split.max_text),
            },
            None => Self {
                min_text: None,
                connector: DEFAULT_CONNECTOR,
                max_text: None,
            },
        }
    }
}

/// Render a quantity in the style of `amount_text`
pub fn format_quantity(
    quantity: &Quantity,
    amount_text: Option<&str>,
    tables: &ConversionTables,
) -> String {
    match quantity {
        Quantity::Scalar(value) => format(*value, amount_text, tables),
        Quantity::Range { min, max } => {
            let parts = RangeParts::detect(amount_text, tables);
            format!(
                "{}{}{}",
                format(*min, parts.min_text, tables),
                parts.connector,
                format(*max, parts.max_text, tables)
            )
        }
    }
}

/// Render a quantity in a fixed style, keeping the connector of `amount_text`
pub fn format_quantity_styled(
    quantity: &Quantity,
    style: AmountStyle,
    amount_text: Option<&str>,
    tables: &ConversionTables,
) -> String {
    match quantity {
        Quantity::Scalar(value) => format_styled(*value, style, tables),
        Quantity::Range { min, max } => {
            let parts = RangeParts::detect(amount_text, tables);
            format!(
                "{}{}{}",
                format_styled(*min, style, tables),
                parts.connector,
                format_styled(*max, style, tables)
            )
        }
    }
}

/// Scale an ingredient by `multiplier`
///
/// A multiplier of exactly 1 returns the ingredient unchanged. Non-positive or
/// non-finite multipliers are rejected with a warning and also leave it unchanged.
pub fn scale(ingredient: &Ingredient, multiplier: f64, tables: &ConversionTables) -> Ingredient {
    if !multiplier.is_finite() || multiplier <= 0.0 {
        warn!("Ignoring invalid multiplier {} for '{}'", multiplier, ingredient.name);
        return ingredient.clone();
    }
    let Some(quantity) = ingredient.quantity else {
        return ingredient.clone();
    };
    if multiplier == 1.0 {
        return ingredient.clone();
    }

    let scaled = quantity.map(|value| value * multiplier);
    let amount = format_quantity(&scaled, ingredient.amount.as_deref(), tables);
    debug!(
        "Scaled '{}' by {}: {:?} -> '{}'",
        ingredient.name, multiplier, ingredient.amount, amount
    );

    Ingredient {
        quantity: Some(scaled),
        amount: Some(amount),
        unit: ingredient
            .unit
            .as_ref()
            .map(|unit| pluralize_for(unit, &scaled)),
        ..ingredient.clone()
    }
}

/// Match the unit's spelling to the amount: `cup` <-> `cups`
///
/// Only scalar amounts of US units written out in full are touched; ranges,
/// metric units and abbreviations keep their spelling.
pub fn pluralize_for(unit: &Unit, quantity: &Quantity) -> Unit {
    let (Quantity::Scalar(value), Some(plural)) = (quantity, unit.canonical.plural_name()) else {
        return unit.clone();
    };
    let singular = unit.canonical.name();
    let display = &unit.display;

    let respelled = if *value > 1.0 && display.eq_ignore_ascii_case(singular) {
        format!("{display}s")
    } else if *value <= 1.0 && display.eq_ignore_ascii_case(plural) {
        display[..display.len() - 1].to_string()
    } else {
        return unit.clone();
    };
    Unit::new(unit.canonical.clone(), &respelled)
}
