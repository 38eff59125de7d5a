//! # Recipe Engine
//!
//! [`RecipeEngine`] owns the conversion tables and the active
//! [`EngineConfig`], and exposes every operation of the crate as a method.
//! It holds no mutable state, so one engine can be shared across threads.
//!
//! ```rust
//! use recipecart::engine::RecipeEngine;
//! use recipecart::ingredient_model::MeasurementSystem;
//!
//! let engine = RecipeEngine::new();
//! let butter = engine.parse_line("1/2 cup butter (softened)");
//!
//! assert_eq!(engine.format_ingredient(&butter, None, 3.0), "1 1/2 cups butter (softened)");
//! assert_eq!(
//!     engine.format_ingredient(&butter, Some(MeasurementSystem::Metric), 1.0),
//!     "118.29 ml butter (softened)"
//! );
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::amount_formatter::{self, AmountStyle};
use crate::amount_parser;
use crate::config::EngineConfig;
use crate::conversion_tables::ConversionTables;
use crate::errors::{ConfigError, ParseError};
use crate::ingredient_model::{
    CanonicalUnit, Ingredient, IngredientList, MeasurementSystem, Quantity, Unit,
};
use crate::ingredient_parser;
use crate::scaling::{self, format_quantity_styled};
use crate::unit_converter;
use crate::unit_normalizer;

/// Parsing, conversion, formatting and scaling over one set of tables
#[derive(Debug, Clone, Default)]
pub struct RecipeEngine {
    tables: ConversionTables,
    config: EngineConfig,
}

impl RecipeEngine {
    /// Engine with the standard tables and default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a validated configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tables: ConversionTables::standard(),
            config,
        })
    }

    /// The conversion tables in use
    pub fn tables(&self) -> &ConversionTables {
        &self.tables
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse the leading amount of `text`
    pub fn parse_amount(&self, text: &str) -> Result<Quantity, ParseError> {
        amount_parser::parse(text, &self.tables)
    }

    /// Canonicalize a unit spelling
    pub fn normalize_unit(&self, raw: &str) -> CanonicalUnit {
        unit_normalizer::normalize(raw, &self.tables)
    }

    /// Measurement system of a canonical unit
    pub fn classify_system(&self, unit: &CanonicalUnit) -> MeasurementSystem {
        unit_normalizer::classify_system(unit)
    }

    /// Convert a value between measurement systems
    pub fn convert(
        &self,
        value: f64,
        unit: &CanonicalUnit,
        target: MeasurementSystem,
    ) -> (f64, CanonicalUnit) {
        unit_converter::convert(value, unit, target, &self.tables)
    }

    /// Format a value in the style of `style_hint`
    pub fn format(&self, value: f64, style_hint: Option<&str>) -> String {
        amount_formatter::format(value, style_hint, &self.tables)
    }

    /// Split one ingredient line into its parts
    pub fn parse_line(&self, text: &str) -> Ingredient {
        ingredient_parser::parse_line(text, &self.tables, &self.config)
    }

    /// Parse every non-blank line of `text`
    pub fn parse_ingredient_list(&self, text: &str) -> IngredientList {
        ingredient_parser::parse_ingredient_list(text, &self.tables, &self.config)
    }

    /// Scale an ingredient by `multiplier`
    pub fn scale(&self, ingredient: &Ingredient, multiplier: f64) -> Ingredient {
        scaling::scale(ingredient, multiplier, &self.tables)
    }

    /// Convert an ingredient to the `target` system
    ///
    /// Amounts written by the converter use decimals for metric results and
    /// slash fractions for US results. Ingredients without an amount, without a
    /// convertible unit, or already in `target` come back unchanged.
    pub fn convert_ingredient(&self, ingredient: &Ingredient, target: MeasurementSystem) -> Ingredient {
        let (Some(quantity), Some(unit)) = (&ingredient.quantity, &ingredient.unit) else {
            return ingredient.clone();
        };
        if unit.system() == target {
            return ingredient.clone();
        }

        let (converted, destination) =
            match unit_converter::convert_quantity(quantity, &unit.canonical, target, &self.tables) {
                Ok(result) => result,
                Err(err) => {
                    debug!("Not converting '{}': {}", ingredient.name, err);
                    return ingredient.clone();
                }
            };
        if destination == unit.canonical {
            return ingredient.clone();
        }

        let style = match target {
            MeasurementSystem::Metric => AmountStyle::Decimal,
            _ => AmountStyle::Fraction,
        };
        let amount = format_quantity_styled(
            &converted,
            style,
            ingredient.amount.as_deref(),
            &self.tables,
        );
        let unit = scaling::pluralize_for(&Unit::canonical(destination), &converted);

        Ingredient {
            quantity: Some(converted),
            amount: Some(amount),
            unit: Some(unit),
            ..ingredient.clone()
        }
    }

    /// Display string for an ingredient: scaled first, then converted
    pub fn format_ingredient(
        &self,
        ingredient: &Ingredient,
        target: Option<MeasurementSystem>,
        multiplier: f64,
    ) -> String {
        let scaled = self.scale(ingredient, multiplier);
        match target {
            Some(system) => self.convert_ingredient(&scaled, system).to_string(),
            None => scaled.to_string(),
        }
    }

    /// Apply the configured multiplier and target system to a parsed list
    pub fn apply_config(&self, list: &IngredientList) -> IngredientList {
        let mut adjusted = IngredientList::new(list.original_text.clone());
        for ingredient in &list.ingredients {
            let scaled = self.scale(ingredient, self.config.multiplier);
            let converted = match self.config.target_system {
                Some(system) => self.convert_ingredient(&scaled, system),
                None => scaled,
            };
            adjusted.add_ingredient(converted);
        }
        adjusted
    }

    /// Read and parse an ingredient file
    pub fn read_ingredient_file(&self, path: impl AsRef<Path>) -> Result<IngredientList> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ingredient file {}", path.display()))?;
        info!("Loaded {} bytes from {}", text.len(), path.display());
        Ok(self.parse_ingredient_list(&text))
    }
}
