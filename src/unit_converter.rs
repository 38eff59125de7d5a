//! # Unit Converter
//!
//! Converts amounts between US customary and metric units. Conversions go
//! through a base value (milliliters or grams) and then pick the destination
//! unit a home cook would expect for that magnitude, so they are one-way
//! approximations rather than a bijection.
//!
//! Countable or unknown units are never converted.

use tracing::debug;

use crate::conversion_tables::ConversionTables;
use crate::errors::ParseError;
use crate::ingredient_model::{CanonicalUnit, MeasurementSystem, Quantity};

/// Convert `value` in `unit` to the `target` system
///
/// Returns the input unchanged when the unit already belongs to `target`, when
/// `target` is `Unknown`, or when the unit cannot be converted.
pub fn convert(
    value: f64,
    unit: &CanonicalUnit,
    target: MeasurementSystem,
    tables: &ConversionTables,
) -> (f64, CanonicalUnit) {
    try_convert(value, unit, target, tables).unwrap_or_else(|err| {
        debug!("Leaving {} {} as is: {}", value, unit, err);
        (value, unit.clone())
    })
}

/// Like [`convert`], but reports units that have no conversion
pub fn try_convert(
    value: f64,
    unit: &CanonicalUnit,
    target: MeasurementSystem,
    tables: &ConversionTables,
) -> Result<(f64, CanonicalUnit), ParseError> {
    let source = unit.system();
    if source == MeasurementSystem::Unknown {
        return Err(ParseError::UnconvertibleUnit(unit.name().to_string()));
    }
    if source == target || target == MeasurementSystem::Unknown {
        return Ok((value, unit.clone()));
    }

    let (factor, dimension) = tables
        .base_factor(unit)
        .ok_or_else(|| ParseError::UnconvertibleUnit(unit.name().to_string()))?;
    let base = value * factor;

    let destination = match target {
        MeasurementSystem::Metric => tables.metric_unit_for(base, dimension),
        _ => tables.us_unit_for(base, dimension),
    };
    let converted = convert_into(value, unit, &destination, tables)?;

    debug!(
        "Converted {} {} -> {} {} (base {:.3})",
        value, unit, converted, destination, base
    );
    Ok((converted, destination))
}

/// Convert both endpoints of a quantity, sharing one destination unit
///
/// For ranges the destination is chosen from the upper endpoint so that
/// `200-300 ml` becomes a range of cups instead of mixing units.
pub fn convert_quantity(
    quantity: &Quantity,
    unit: &CanonicalUnit,
    target: MeasurementSystem,
    tables: &ConversionTables,
) -> Result<(Quantity, CanonicalUnit), ParseError> {
    match quantity {
        Quantity::Scalar(value) => {
            let (converted, destination) = try_convert(*value, unit, target, tables)?;
            Ok((Quantity::Scalar(converted), destination))
        }
        Quantity::Range { min, max } => {
            let (high, destination) = try_convert(*max, unit, target, tables)?;
            let low = convert_into(*min, unit, &destination, tables)?;
            Ok((Quantity::range(low, high), destination))
        }
    }
}

/// Re-express `value` of `from` in `to`; both must share a dimension
fn convert_into(
    value: f64,
    from: &CanonicalUnit,
    to: &CanonicalUnit,
    tables: &ConversionTables,
) -> Result<f64, ParseError> {
    if from == to {
        return Ok(value);
    }
    let (from_factor, from_dimension) = tables
        .base_factor(from)
        .ok_or_else(|| ParseError::UnconvertibleUnit(from.name().to_string()))?;
    let (to_factor, to_dimension) = tables
        .base_factor(to)
        .ok_or_else(|| ParseError::UnconvertibleUnit(to.name().to_string()))?;
    if from_dimension != to_dimension {
        return Err(ParseError::UnconvertibleUnit(from.name().to_string()));
    }
    Ok(value * from_factor / to_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion_tables::{G_PER_POUND, ML_PER_CUP};

    fn tables() -> ConversionTables {
        ConversionTables::standard()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_cup_to_metric() {
        let (value, unit) = convert(1.0, &CanonicalUnit::Cup, MeasurementSystem::Metric, &tables());
        assert!(approx(value, ML_PER_CUP));
        assert_eq!(unit, CanonicalUnit::Milliliter);
    }

    #[test]
    fn test_metric_upgrade_to_liters_and_kilograms() {
        let t = tables();
        let (value, unit) = convert(5.0, &CanonicalUnit::Cup, MeasurementSystem::Metric, &t);
        assert_eq!(unit, CanonicalUnit::Liter);
        assert!(approx(value, 1.18294));

        let (value, unit) = convert(3.0, &CanonicalUnit::Pound, MeasurementSystem::Metric, &t);
        assert_eq!(unit, CanonicalUnit::Kilogram);
        assert!(approx(value, 1.360776));

        let (_, unit) = convert(2.0, &CanonicalUnit::Pound, MeasurementSystem::Metric, &t);
        assert_eq!(unit, CanonicalUnit::Gram);
    }

    #[test]
    fn test_metric_to_us_thresholds() {
        let t = tables();
        let (_, unit) = convert(10.0, &CanonicalUnit::Milliliter, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Teaspoon);
        let (value, unit) = convert(30.0, &CanonicalUnit::Milliliter, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Tablespoon);
        assert!(approx(value, 30.0 / 14.7868));
        let (_, unit) = convert(100.0, &CanonicalUnit::Milliliter, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::FluidOunce);
        let (_, unit) = convert(250.0, &CanonicalUnit::Milliliter, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Cup);

        let (_, unit) = convert(50.0, &CanonicalUnit::Gram, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Ounce);
        let (value, unit) = convert(500.0, &CanonicalUnit::Gram, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Pound);
        assert!(approx(value, 500.0 / G_PER_POUND));
    }

    #[test]
    fn test_liters_and_kilograms_redispatch() {
        let t = tables();
        let (value, unit) = convert(1.0, &CanonicalUnit::Liter, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Cup);
        assert!(approx(value, 1000.0 / ML_PER_CUP));

        let (_, unit) = convert(0.05, &CanonicalUnit::Kilogram, MeasurementSystem::Us, &t);
        assert_eq!(unit, CanonicalUnit::Ounce);
    }

    #[test]
    fn test_same_system_is_noop() {
        let t = tables();
        for unit in [CanonicalUnit::Cup, CanonicalUnit::Gram, CanonicalUnit::Gallon] {
            let system = unit.system();
            assert_eq!(convert(2.5, &unit, system, &t), (2.5, unit.clone()));
        }
    }

    #[test]
    fn test_unknown_units_are_not_converted() {
        let t = tables();
        let onion = CanonicalUnit::Unknown("onion".to_string());
        assert_eq!(convert(2.0, &onion, MeasurementSystem::Metric, &t), (2.0, onion.clone()));
        assert_eq!(
            try_convert(2.0, &onion, MeasurementSystem::Metric, &t),
            Err(ParseError::UnconvertibleUnit("onion".to_string()))
        );
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let t = tables();
        assert_eq!(
            convert(1.0, &CanonicalUnit::Cup, MeasurementSystem::Unknown, &t),
            (1.0, CanonicalUnit::Cup)
        );
    }

    #[test]
    fn test_gallon_to_metric() {
        let (value, unit) = convert(1.0, &CanonicalUnit::Gallon, MeasurementSystem::Metric, &tables());
        assert_eq!(unit, CanonicalUnit::Liter);
        assert!(approx(value, 3.78541));
    }

    #[test]
    fn test_range_shares_destination_unit() {
        let t = tables();
        let (quantity, unit) = convert_quantity(
            &Quantity::range(200.0, 300.0),
            &CanonicalUnit::Milliliter,
            MeasurementSystem::Us,
            &t,
        )
        .unwrap();
        assert_eq!(unit, CanonicalUnit::Cup);
        match quantity {
            Quantity::Range { min, max } => {
                assert!(approx(min, 200.0 / ML_PER_CUP));
                assert!(approx(max, 300.0 / ML_PER_CUP));
            }
            other => panic!("expected a range, got {:?}", other),
        }
    }
}
