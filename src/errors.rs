//! # Error Types Module
//!
//! Error types shared by the parsing, conversion and configuration code.
//! None of the parsing errors are fatal: the engine turns every one of them
//! into a pass-through decision and keeps the unparsed text as the ingredient name.

use thiserror::Error;

/// Outcomes of a failed sub-parse or an impossible conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// No amount pattern matched at the start of the text
    #[error("no amount found")]
    NoAmount,
    /// No known unit token at the start of the text
    #[error("no unit found")]
    NoUnit,
    /// Unit is present but countable or unknown, so it is never converted
    #[error("unit '{0}' cannot be converted")]
    UnconvertibleUnit(String),
}

/// Errors raised while building an [`EngineConfig`](crate::config::EngineConfig)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A configuration key holds a value that cannot be interpreted
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
    /// Multipliers must be finite and strictly positive
    #[error("multiplier must be a positive number, got {0}")]
    InvalidMultiplier(f64),
}
