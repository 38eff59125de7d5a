//! # Ingredient and Quantity Data Model
//!
//! This module defines the data structures the engine produces and consumes:
//! semantic quantities, canonical units with their original spelling, measurement
//! systems, and the parsed ingredient record itself.
//!
//! ## Core Concepts
//!
//! - **Quantity**: a single value or a range, never negative
//! - **CanonicalUnit**: the normalized unit name (`tbsp` -> `tablespoon`)
//! - **Unit**: a canonical unit plus the spelling found in the recipe (`"Tbsp."`)
//! - **MeasurementSystem**: US customary, metric, or unknown (countable items)
//! - **Ingredient**: one recipe line split into amount, unit, name and notes
//!
//! ## Usage
//!
//! ```rust
//! use recipecart::ingredient_model::{CanonicalUnit, Ingredient, Quantity, Unit};
//!
//! let broth = Ingredient::new("broth")
//!     .with_quantity(Quantity::range(3.0, 4.0))
//!     .with_amount("3-4")
//!     .with_unit(Unit::canonical(CanonicalUnit::Cup));
//!
//! assert_eq!(broth.to_string(), "3-4 cup broth");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::amount_formatter::format_decimal;
use crate::errors::ConfigError;

/// A parsed amount: either one value or two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Single value (e.g., "2", "1 1/2", "¾")
    Scalar(f64),
    /// Range of values (e.g., "3-4", "1 to 2")
    Range {
        /// Lower endpoint
        min: f64,
        /// Upper endpoint
        max: f64,
    },
}

impl Quantity {
    /// Create a range, swapping the endpoints if they arrive reversed
    pub fn range(min: f64, max: f64) -> Self {
        if min <= max {
            Quantity::Range { min, max }
        } else {
            Quantity::Range { min: max, max: min }
        }
    }

    /// Check if this quantity represents a range
    pub fn is_range(&self) -> bool {
        matches!(self, Quantity::Range { .. })
    }

    /// Midpoint for ranges, the value itself for scalars
    pub fn estimated_value(&self) -> f64 {
        match self {
            Quantity::Scalar(value) => *value,
            Quantity::Range { min, max } => (min + max) / 2.0,
        }
    }

    /// Largest value covered by this quantity
    pub fn max_value(&self) -> f64 {
        match self {
            Quantity::Scalar(value) => *value,
            Quantity::Range { max, .. } => *max,
        }
    }

    /// Apply `f` to every endpoint
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Quantity::Scalar(value) => Quantity::Scalar(f(*value)),
            Quantity::Range { min, max } => Quantity::range(f(*min), f(*max)),
        }
    }
}

/// Measurement systems a unit can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// US customary (cups, spoons, ounces, pounds)
    Us,
    /// Metric (milliliters, liters, grams, kilograms)
    Metric,
    /// Countable or unrecognized units
    Unknown,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasurementSystem::Us => "us",
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

impl FromStr for MeasurementSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" | "us customary" | "imperial" => Ok(MeasurementSystem::Us),
            "metric" => Ok(MeasurementSystem::Metric),
            _ => Err(ConfigError::InvalidValue {
                key: "measurement system".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Normalized unit names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalUnit {
    // US volume
    Cup,
    Tablespoon,
    Teaspoon,
    FluidOunce,
    Pint,
    Quart,
    Gallon,

    // US weight
    Ounce,
    Pound,

    // Metric
    Milliliter,
    Liter,
    Gram,
    Kilogram,

    /// Anything the alias table does not know, kept as written (lowercased)
    Unknown(String),
}

impl CanonicalUnit {
    /// The canonical name (e.g., "tablespoon", "fluid ounce")
    pub fn name(&self) -> &str {
        match self {
            CanonicalUnit::Cup => "cup",
            CanonicalUnit::Tablespoon => "tablespoon",
            CanonicalUnit::Teaspoon => "teaspoon",
            CanonicalUnit::FluidOunce => "fluid ounce",
            CanonicalUnit::Pint => "pint",
            CanonicalUnit::Quart => "quart",
            CanonicalUnit::Gallon => "gallon",
            CanonicalUnit::Ounce => "ounce",
            CanonicalUnit::Pound => "pound",
            CanonicalUnit::Milliliter => "milliliter",
            CanonicalUnit::Liter => "liter",
            CanonicalUnit::Gram => "gram",
            CanonicalUnit::Kilogram => "kilogram",
            CanonicalUnit::Unknown(raw) => raw,
        }
    }

    /// Spelling used when the engine writes this unit itself, after a conversion
    pub fn display_name(&self) -> &str {
        match self {
            CanonicalUnit::Milliliter => "ml",
            CanonicalUnit::Liter => "L",
            CanonicalUnit::Gram => "g",
            CanonicalUnit::Kilogram => "kg",
            other => other.name(),
        }
    }

    /// Plural spelling for the US units that get pluralized after scaling
    pub fn plural_name(&self) -> Option<&'static str> {
        match self {
            CanonicalUnit::Cup => Some("cups"),
            CanonicalUnit::Tablespoon => Some("tablespoons"),
            CanonicalUnit::Teaspoon => Some("teaspoons"),
            CanonicalUnit::FluidOunce => Some("fluid ounces"),
            CanonicalUnit::Pint => Some("pints"),
            CanonicalUnit::Quart => Some("quarts"),
            CanonicalUnit::Gallon => Some("gallons"),
            CanonicalUnit::Ounce => Some("ounces"),
            CanonicalUnit::Pound => Some("pounds"),
            _ => None,
        }
    }

    /// Static classification of units into measurement systems
    pub fn system(&self) -> MeasurementSystem {
        match self {
            CanonicalUnit::Cup
            | CanonicalUnit::Tablespoon
            | CanonicalUnit::Teaspoon
            | CanonicalUnit::FluidOunce
            | CanonicalUnit::Pint
            | CanonicalUnit::Quart
            | CanonicalUnit::Gallon
            | CanonicalUnit::Ounce
            | CanonicalUnit::Pound => MeasurementSystem::Us,
            CanonicalUnit::Milliliter
            | CanonicalUnit::Liter
            | CanonicalUnit::Gram
            | CanonicalUnit::Kilogram => MeasurementSystem::Metric,
            CanonicalUnit::Unknown(_) => MeasurementSystem::Unknown,
        }
    }

    /// Check if this unit came out of the alias table
    pub fn is_known(&self) -> bool {
        !matches!(self, CanonicalUnit::Unknown(_))
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A unit with the spelling it had in the recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Normalized unit
    pub canonical: CanonicalUnit,
    /// Surface spelling (e.g., "Tbsp.", "cups")
    pub display: String,
}

impl Unit {
    /// Create a unit from its canonical form and original spelling
    pub fn new(canonical: CanonicalUnit, display: &str) -> Self {
        Self {
            canonical,
            display: display.to_string(),
        }
    }

    /// Create a unit displayed with the engine's own spelling
    pub fn canonical(canonical: CanonicalUnit) -> Self {
        let display = canonical.display_name().to_string();
        Self { canonical, display }
    }

    /// Canonical name of this unit
    pub fn name(&self) -> &str {
        self.canonical.name()
    }

    /// Measurement system of the canonical unit
    pub fn system(&self) -> MeasurementSystem {
        self.canonical.system()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// One ingredient line split into its parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Semantic amount, if one was found
    pub quantity: Option<Quantity>,

    /// Amount as displayed (e.g., "1 1/2", "2½", "3 to 4")
    pub amount: Option<String>,

    /// Unit, if one was recognized
    pub unit: Option<Unit>,

    /// The name of the ingredient (e.g., "flour", "olive oil")
    pub name: String,

    /// First parenthesized remark (e.g., "extra virgin")
    pub notes: Option<String>,

    /// The line this ingredient was parsed from
    pub original_text: String,
}

impl Ingredient {
    /// Create a new ingredient with just a name
    pub fn new(name: &str) -> Self {
        Self {
            quantity: None,
            amount: None,
            unit: None,
            name: name.to_string(),
            notes: None,
            original_text: name.to_string(),
        }
    }

    /// Add a quantity to this ingredient
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the displayed amount text
    pub fn with_amount(mut self, amount: &str) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    /// Add a unit to this ingredient
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Add notes to this ingredient
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Record the source line
    pub fn with_original_text(mut self, text: &str) -> Self {
        self.original_text = text.to_string();
        self
    }

    /// Check if this ingredient has a quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// Midpoint or scalar value of the quantity
    pub fn estimated_amount(&self) -> Option<f64> {
        self.quantity.as_ref().map(Quantity::estimated_value)
    }

    /// Measurement system of the unit, `Unknown` when there is none
    pub fn system(&self) -> MeasurementSystem {
        self.unit
            .as_ref()
            .map_or(MeasurementSystem::Unknown, Unit::system)
    }

    /// Amount text, falling back to a plain rendering of the quantity
    fn amount_text(&self) -> Option<String> {
        if let Some(amount) = &self.amount {
            return Some(amount.clone());
        }
        self.quantity.map(|quantity| quantity.to_string())
    }
}

/// A parsed recipe: every non-blank line as an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientList {
    /// Parsed ingredients in source order
    pub ingredients: Vec<Ingredient>,

    /// Original raw text that was parsed
    pub original_text: String,
}

impl IngredientList {
    /// Create a new empty ingredient list
    pub fn new(original_text: String) -> Self {
        Self {
            ingredients: Vec::new(),
            original_text,
        }
    }

    /// Add an ingredient to the list
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Number of ingredients
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Check if the list holds no ingredients
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Number of ingredients for which an amount was recognized
    pub fn quantified_count(&self) -> usize {
        self.ingredients.iter().filter(|i| i.has_quantity()).count()
    }

    /// One ingredient per line, ready for the clipboard
    pub fn to_clipboard_text(&self) -> String {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Scalar(value) => write!(f, "{}", format_decimal(*value)),
            Quantity::Range { min, max } => {
                write!(f, "{}-{}", format_decimal(*min), format_decimal(*max))
            }
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(amount) = self.amount_text() {
            parts.push(amount);
        }
        if let Some(unit) = &self.unit {
            parts.push(unit.display.clone());
        }
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        if let Some(notes) = &self.notes {
            parts.push(format!("({notes})"));
        }
        write!(f, "{}", parts.join(" "))
    }
}

impl fmt::Display for IngredientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_clipboard_text())
    }
}
