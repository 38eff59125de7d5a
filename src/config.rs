//! # Engine Configuration Module
//!
//! This module defines the settings a [`RecipeEngine`](crate::engine::RecipeEngine)
//! applies on top of plain parsing: the target measurement system, the serving
//! multiplier and name cleanup. Values come from defaults, the environment (a
//! `.env` file is honored by the binary) and command line overrides, in that order.

use tracing::debug;

use crate::errors::ConfigError;
use crate::ingredient_model::MeasurementSystem;

// Environment keys
pub const SYSTEM_ENV_KEY: &str = "RECIPECART_SYSTEM";
pub const MULTIPLIER_ENV_KEY: &str = "RECIPECART_MULTIPLIER";
pub const CLEAN_NAMES_ENV_KEY: &str = "RECIPECART_CLEAN_NAMES";

pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Settings applied when formatting parsed ingredients
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Convert amounts to this system; `None` keeps the recipe's own units
    pub target_system: Option<MeasurementSystem>,
    /// Serving multiplier (e.g., 2.0 doubles the recipe)
    pub multiplier: f64,
    /// Tidy ingredient names after parsing
    pub clean_names: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_system: None,
            multiplier: DEFAULT_MULTIPLIER,
            clean_names: true,
        }
    }
}

impl EngineConfig {
    /// Set the target measurement system
    pub fn with_target_system(mut self, system: MeasurementSystem) -> Self {
        self.target_system = Some(system);
        self
    }

    /// Set the serving multiplier
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(ConfigError::InvalidMultiplier(self.multiplier));
        }
        if self.target_system == Some(MeasurementSystem::Unknown) {
            return Err(ConfigError::InvalidValue {
                key: SYSTEM_ENV_KEY.to_string(),
                value: MeasurementSystem::Unknown.to_string(),
            });
        }
        Ok(())
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Missing keys keep their defaults. The result is validated.
    ///
    /// ```rust
    /// use recipecart::config::EngineConfig;
    /// use recipecart::ingredient_model::MeasurementSystem;
    ///
    /// let config = EngineConfig::from_lookup(|key| match key {
    ///     "RECIPECART_SYSTEM" => Some("metric".to_string()),
    ///     "RECIPECART_MULTIPLIER" => Some("2".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.target_system, Some(MeasurementSystem::Metric));
    /// assert_eq!(config.multiplier, 2.0);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SYSTEM_ENV_KEY) {
            config.target_system = parse_target_system(&value)?;
        }
        if let Some(value) = lookup(MULTIPLIER_ENV_KEY) {
            config.multiplier = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: MULTIPLIER_ENV_KEY.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(CLEAN_NAMES_ENV_KEY) {
            config.clean_names = parse_flag(CLEAN_NAMES_ENV_KEY, &value)?;
        }

        config.validate()?;
        debug!("Loaded engine configuration: {:?}", config);
        Ok(config)
    }
}

/// `none` (or an empty value) disables conversion
pub fn parse_target_system(value: &str) -> Result<Option<MeasurementSystem>, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "" | "none" | "off" => Ok(None),
        other => other
            .parse::<MeasurementSystem>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: SYSTEM_ENV_KEY.to_string(),
                value: value.to_string(),
            }),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.target_system, None);
        assert_eq!(config.multiplier, 1.0);
        assert!(config.clean_names);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_multipliers() {
        for multiplier in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = EngineConfig::default().with_multiplier(multiplier);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidMultiplier(_))
            ));
        }
        assert!(EngineConfig::default().with_multiplier(0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_target() {
        let config = EngineConfig::default().with_target_system(MeasurementSystem::Unknown);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_lookup() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (SYSTEM_ENV_KEY, "US"),
            (MULTIPLIER_ENV_KEY, " 1.5 "),
            (CLEAN_NAMES_ENV_KEY, "no"),
        ]))
        .unwrap();
        assert_eq!(config.target_system, Some(MeasurementSystem::Us));
        assert_eq!(config.multiplier, 1.5);
        assert!(!config.clean_names);
    }

    #[test]
    fn test_from_lookup_empty_keeps_defaults() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_lookup_errors() {
        let err = EngineConfig::from_lookup(lookup_from(&[(SYSTEM_ENV_KEY, "cubits")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: SYSTEM_ENV_KEY.to_string(),
                value: "cubits".to_string()
            }
        );

        let err = EngineConfig::from_lookup(lookup_from(&[(MULTIPLIER_ENV_KEY, "two")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = EngineConfig::from_lookup(lookup_from(&[(MULTIPLIER_ENV_KEY, "-3")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMultiplier(-3.0));

        let err = EngineConfig::from_lookup(lookup_from(&[(CLEAN_NAMES_ENV_KEY, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_target_system() {
        assert_eq!(parse_target_system("none"), Ok(None));
        assert_eq!(parse_target_system(""), Ok(None));
        assert_eq!(parse_target_system("Metric"), Ok(Some(MeasurementSystem::Metric)));
        assert!(parse_target_system("unknown").is_err());
    }
}
