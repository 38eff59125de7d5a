//! # Recipe Cart
//!
//! Turns free-form recipe ingredient lines into shopping-list-ready data:
//! amounts (including fractions and ranges), canonical units, names and notes.
//! Parsed ingredients can be scaled by a serving multiplier, converted between
//! US customary and metric units, and rendered back in the style they were
//! written in.

pub mod amount_formatter;
pub mod amount_parser;
pub mod config;
pub mod conversion_tables;
pub mod engine;
pub mod errors;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod scaling;
pub mod shopping;
pub mod unit_converter;
pub mod unit_normalizer;

pub use engine::RecipeEngine;
