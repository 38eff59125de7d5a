//! # Conversion Tables Module
//!
//! Constant data shared by every engine operation: fixed conversion factors,
//! the unit alias table, the destination-unit thresholds, and the fraction
//! tables used for parsing and display. Built once per engine, never mutated.

use std::collections::HashMap;

use crate::ingredient_model::CanonicalUnit;

// Volume conversion constants (to milliliters)
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_TABLESPOON: f64 = 14.7868;
pub const ML_PER_TEASPOON: f64 = 4.92892;
pub const ML_PER_FLUID_OUNCE: f64 = 29.5735;
pub const ML_PER_PINT: f64 = 473.176;
pub const ML_PER_QUART: f64 = 946.353;
pub const ML_PER_GALLON: f64 = 3785.41;
pub const ML_PER_LITER: f64 = 1000.0;

// Weight conversion constants (to grams)
pub const G_PER_POUND: f64 = 453.592;
pub const G_PER_OUNCE: f64 = 28.3495;
pub const G_PER_KILOGRAM: f64 = 1000.0;

/// Metric amounts at or above this base value move to liters / kilograms
pub const METRIC_UPGRADE_THRESHOLD: f64 = 1000.0;

/// Tolerance when snapping to an ASCII fraction
pub const ASCII_FRACTION_TOLERANCE: f64 = 0.01;
/// Tolerance when snapping to a Unicode fraction glyph
pub const UNICODE_FRACTION_TOLERANCE: f64 = 0.05;

/// Plurals that are resolved through the alias table instead of trailing-`s` stripping
pub const PLURAL_EXCEPTIONS: [&str; 7] = [
    "tablespoons",
    "teaspoons",
    "cups",
    "ounces",
    "pounds",
    "grams",
    "kilograms",
];

/// What a base value measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Base unit: milliliter
    Volume,
    /// Base unit: gram
    Mass,
}

/// A displayable fraction and its value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionEntry {
    pub value: f64,
    pub text: &'static str,
}

/// Immutable lookup tables owned by a [`RecipeEngine`](crate::engine::RecipeEngine)
#[derive(Debug, Clone)]
pub struct ConversionTables {
    /// Base factor (ml or g per unit) for every convertible unit
    factors: HashMap<CanonicalUnit, (f64, Dimension)>,
    /// Lowercased spelling -> canonical unit
    aliases: HashMap<&'static str, CanonicalUnit>,
    /// Upper bound (exclusive, in ml) -> US destination unit, ascending
    us_volume_thresholds: Vec<(f64, CanonicalUnit)>,
    /// Upper bound (exclusive, in g) -> US destination unit, ascending
    us_mass_thresholds: Vec<(f64, CanonicalUnit)>,
    /// Fractions written with a slash
    ascii_fractions: Vec<FractionEntry>,
    /// Unicode vulgar fractions
    unicode_fractions: Vec<(char, f64)>,
}

impl ConversionTables {
    /// The standard US/metric kitchen tables
    pub fn standard() -> Self {
        let factors = HashMap::from([
            (CanonicalUnit::Cup, (ML_PER_CUP, Dimension::Volume)),
            (CanonicalUnit::Tablespoon, (ML_PER_TABLESPOON, Dimension::Volume)),
            (CanonicalUnit::Teaspoon, (ML_PER_TEASPOON, Dimension::Volume)),
            (CanonicalUnit::FluidOunce, (ML_PER_FLUID_OUNCE, Dimension::Volume)),
            (CanonicalUnit::Pint, (ML_PER_PINT, Dimension::Volume)),
            (CanonicalUnit::Quart, (ML_PER_QUART, Dimension::Volume)),
            (CanonicalUnit::Gallon, (ML_PER_GALLON, Dimension::Volume)),
            (CanonicalUnit::Milliliter, (1.0, Dimension::Volume)),
            (CanonicalUnit::Liter, (ML_PER_LITER, Dimension::Volume)),
            (CanonicalUnit::Pound, (G_PER_POUND, Dimension::Mass)),
            (CanonicalUnit::Ounce, (G_PER_OUNCE, Dimension::Mass)),
            (CanonicalUnit::Gram, (1.0, Dimension::Mass)),
            (CanonicalUnit::Kilogram, (G_PER_KILOGRAM, Dimension::Mass)),
        ]);

        let aliases = HashMap::from([
            // Volume units
            ("tablespoon", CanonicalUnit::Tablespoon),
            ("tablespoons", CanonicalUnit::Tablespoon),
            ("tbsp", CanonicalUnit::Tablespoon),
            ("tbl", CanonicalUnit::Tablespoon),
            ("tbs", CanonicalUnit::Tablespoon),
            ("teaspoon", CanonicalUnit::Teaspoon),
            ("teaspoons", CanonicalUnit::Teaspoon),
            ("tsp", CanonicalUnit::Teaspoon),
            ("t", CanonicalUnit::Teaspoon),
            ("cup", CanonicalUnit::Cup),
            ("cups", CanonicalUnit::Cup),
            ("c", CanonicalUnit::Cup),
            ("fluid ounce", CanonicalUnit::FluidOunce),
            ("fl oz", CanonicalUnit::FluidOunce),
            ("floz", CanonicalUnit::FluidOunce),
            ("pint", CanonicalUnit::Pint),
            ("pt", CanonicalUnit::Pint),
            ("quart", CanonicalUnit::Quart),
            ("qt", CanonicalUnit::Quart),
            ("gallon", CanonicalUnit::Gallon),
            ("gal", CanonicalUnit::Gallon),
            ("milliliter", CanonicalUnit::Milliliter),
            ("millilitre", CanonicalUnit::Milliliter),
            ("ml", CanonicalUnit::Milliliter),
            ("liter", CanonicalUnit::Liter),
            ("litre", CanonicalUnit::Liter),
            ("l", CanonicalUnit::Liter),
            // Weight units
            ("ounce", CanonicalUnit::Ounce),
            ("ounces", CanonicalUnit::Ounce),
            ("oz", CanonicalUnit::Ounce),
            ("pound", CanonicalUnit::Pound),
            ("pounds", CanonicalUnit::Pound),
            ("lb", CanonicalUnit::Pound),
            ("gram", CanonicalUnit::Gram),
            ("grams", CanonicalUnit::Gram),
            ("g", CanonicalUnit::Gram),
            ("kilogram", CanonicalUnit::Kilogram),
            ("kilograms", CanonicalUnit::Kilogram),
            ("kg", CanonicalUnit::Kilogram),
        ]);

        let us_volume_thresholds = vec![
            (15.0, CanonicalUnit::Teaspoon),
            (60.0, CanonicalUnit::Tablespoon),
            (240.0, CanonicalUnit::FluidOunce),
            (f64::INFINITY, CanonicalUnit::Cup),
        ];
        let us_mass_thresholds = vec![
            (100.0, CanonicalUnit::Ounce),
            (f64::INFINITY, CanonicalUnit::Pound),
        ];

        let ascii_fractions = [
            (1.0 / 4.0, "1/4"),
            (1.0 / 2.0, "1/2"),
            (3.0 / 4.0, "3/4"),
            (1.0 / 3.0, "1/3"),
            (2.0 / 3.0, "2/3"),
            (1.0 / 5.0, "1/5"),
            (2.0 / 5.0, "2/5"),
            (3.0 / 5.0, "3/5"),
            (4.0 / 5.0, "4/5"),
            (1.0 / 8.0, "1/8"),
            (3.0 / 8.0, "3/8"),
            (5.0 / 8.0, "5/8"),
            (7.0 / 8.0, "7/8"),
        ]
        .into_iter()
        .map(|(value, text)| FractionEntry { value, text })
        .collect();

        let unicode_fractions = vec![
            ('½', 1.0 / 2.0),
            ('⅓', 1.0 / 3.0),
            ('⅔', 2.0 / 3.0),
            ('¼', 1.0 / 4.0),
            ('¾', 3.0 / 4.0),
            ('⅕', 1.0 / 5.0),
            ('⅖', 2.0 / 5.0),
            ('⅗', 3.0 / 5.0),
            ('⅘', 4.0 / 5.0),
            ('⅙', 1.0 / 6.0),
            ('⅚', 5.0 / 6.0),
            ('⅛', 1.0 / 8.0),
            ('⅜', 3.0 / 8.0),
            ('⅝', 5.0 / 8.0),
            ('⅞', 7.0 / 8.0),
        ];

        Self {
            factors,
            aliases,
            us_volume_thresholds,
            us_mass_thresholds,
            ascii_fractions,
            unicode_fractions,
        }
    }

    /// Look up a cleaned, lowercased unit spelling
    pub fn alias(&self, spelling: &str) -> Option<&CanonicalUnit> {
        self.aliases.get(spelling)
    }

    /// Base factor and dimension of a convertible unit
    pub fn base_factor(&self, unit: &CanonicalUnit) -> Option<(f64, Dimension)> {
        self.factors.get(unit).copied()
    }

    /// Metric destination for a base value: ml/g, upgraded to L/kg from 1000
    pub fn metric_unit_for(&self, base: f64, dimension: Dimension) -> CanonicalUnit {
        match (dimension, base >= METRIC_UPGRADE_THRESHOLD) {
            (Dimension::Volume, false) => CanonicalUnit::Milliliter,
            (Dimension::Volume, true) => CanonicalUnit::Liter,
            (Dimension::Mass, false) => CanonicalUnit::Gram,
            (Dimension::Mass, true) => CanonicalUnit::Kilogram,
        }
    }

    /// US destination for a base value, picked by magnitude
    pub fn us_unit_for(&self, base: f64, dimension: Dimension) -> CanonicalUnit {
        let thresholds = match dimension {
            Dimension::Volume => &self.us_volume_thresholds,
            Dimension::Mass => &self.us_mass_thresholds,
        };
        thresholds
            .iter()
            .find(|(upper, _)| base < *upper)
            .or(thresholds.last())
            .map(|(_, unit)| unit.clone())
            .unwrap_or(CanonicalUnit::Cup)
    }

    /// Fractions written with a slash
    pub fn ascii_fractions(&self) -> &[FractionEntry] {
        &self.ascii_fractions
    }

    /// Unicode glyphs with their values
    pub fn unicode_fractions(&self) -> &[(char, f64)] {
        &self.unicode_fractions
    }

    /// Value of a Unicode fraction glyph
    pub fn unicode_value(&self, glyph: char) -> Option<f64> {
        self.unicode_fractions
            .iter()
            .find(|(candidate, _)| *candidate == glyph)
            .map(|(_, value)| *value)
    }

    /// Check if any character of `text` is a tabulated Unicode fraction
    pub fn contains_unicode_fraction(&self, text: &str) -> bool {
        text.chars().any(|c| self.unicode_value(c).is_some())
    }
}

impl Default for ConversionTables {
    fn default() -> Self {
        Self::standard()
    }
}
