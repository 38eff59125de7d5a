//! # Amount Formatter
//!
//! Renders numeric amounts back to text in the register of the original
//! recipe: ASCII fractions (`1 1/2`), Unicode fractions (`1½`) or decimals
//! (`1.25`). Values are rounded to two decimal places before anything else.
//!
//! When a fraction style finds no close fraction, the value falls back to one
//! decimal place if its fractional part is below 0.1 (`1.1`) and two otherwise
//! (`236.59`). The decimal style trims trailing zeros instead (`2.5`, `3`).

use crate::conversion_tables::{
    ConversionTables, ASCII_FRACTION_TOLERANCE, UNICODE_FRACTION_TOLERANCE,
};

// Keeps 0.59 from snapping to 3/5 through float noise
const TOLERANCE_EPSILON: f64 = 1e-9;

/// Stylistic register of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStyle {
    /// Whole numbers and slash fractions, decimals as a fallback
    Fraction,
    /// Whole part followed by a vulgar fraction glyph
    UnicodeFraction,
    /// Plain decimal
    Decimal,
}

impl AmountStyle {
    /// Infer the style from the original amount text
    pub fn from_hint(style_hint: Option<&str>, tables: &ConversionTables) -> Self {
        match style_hint {
            Some(hint) if tables.contains_unicode_fraction(hint) => AmountStyle::UnicodeFraction,
            Some(hint) if hint.contains('.') && !hint.contains('/') => AmountStyle::Decimal,
            _ => AmountStyle::Fraction,
        }
    }
}

/// Format `value` in the style of `style_hint`
///
/// ```rust
/// use recipecart::amount_formatter::format;
/// use recipecart::conversion_tables::ConversionTables;
///
/// let tables = ConversionTables::standard();
/// assert_eq!(format(0.5, None, &tables), "1/2");
/// assert_eq!(format(1.5, Some("1½"), &tables), "1½");
/// assert_eq!(format(2.25, Some("1.5"), &tables), "2.25");
/// ```
pub fn format(value: f64, style_hint: Option<&str>, tables: &ConversionTables) -> String {
    format_styled(value, AmountStyle::from_hint(style_hint, tables), tables)
}

/// Format `value` in an explicit style
pub fn format_styled(value: f64, style: AmountStyle, tables: &ConversionTables) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    match style {
        AmountStyle::Decimal => format_decimal(value),
        AmountStyle::Fraction => format_with_fractions(value, |frac| {
            nearest(
                tables.ascii_fractions().iter().map(|e| (e.value, e.text.to_string())),
                frac,
                ASCII_FRACTION_TOLERANCE,
            )
            .map(|text| (text, " "))
        }),
        AmountStyle::UnicodeFraction => format_with_fractions(value, |frac| {
            nearest(
                tables.unicode_fractions().iter().map(|(glyph, v)| (*v, glyph.to_string())),
                frac,
                UNICODE_FRACTION_TOLERANCE,
            )
            .map(|text| (text, ""))
        }),
    }
}

/// Plain decimal with at most two places and no trailing zeros
pub fn format_decimal(value: f64) -> String {
    let text = format!("{:.2}", round2(value));
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Fallback for fraction styles: one place below a tenth, else two
fn format_fixed(rounded: f64, fraction: f64) -> String {
    if fraction.abs() < 0.1 {
        format!("{:.1}", (rounded * 10.0).round() / 10.0)
    } else {
        format!("{:.2}", rounded)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole numbers as integers, otherwise whole part + fraction from `snap`,
/// falling back to fixed decimals when `snap` finds nothing close enough
fn format_with_fractions(
    value: f64,
    snap: impl Fn(f64) -> Option<(String, &'static str)>,
) -> String {
    let rounded = round2(value);
    let whole = rounded.trunc();
    let fraction = rounded - whole;

    if fraction.abs() < TOLERANCE_EPSILON {
        return format!("{:.0}", whole);
    }

    match snap(fraction) {
        Some((text, _)) if whole == 0.0 => text,
        Some((text, separator)) => format!("{:.0}{}{}", whole, separator, text),
        None => format_fixed(rounded, fraction),
    }
}

/// Text of the tabulated fraction closest to `fraction`, if within `tolerance`
fn nearest(
    entries: impl Iterator<Item = (f64, String)>,
    fraction: f64,
    tolerance: f64,
) -> Option<String> {
    entries
        .map(|(value, text)| ((value - fraction).abs(), text))
        .filter(|(distance, _)| *distance < tolerance - TOLERANCE_EPSILON)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ConversionTables {
        ConversionTables::standard()
    }

    #[test]
    fn test_whole_numbers() {
        let t = tables();
        assert_eq!(format(2.0, None, &t), "2");
        assert_eq!(format(0.0, None, &t), "0");
        assert_eq!(format(2.999, None, &t), "3");
        assert_eq!(format(12.0, Some("½"), &t), "12");
    }

    #[test]
    fn test_ascii_fractions() {
        let t = tables();
        assert_eq!(format(0.5, None, &t), "1/2");
        assert_eq!(format(1.5, None, &t), "1 1/2");
        assert_eq!(format(0.333, None, &t), "1/3");
        assert_eq!(format(2.0 / 3.0, None, &t), "2/3");
        assert_eq!(format(0.125, None, &t), "1/8");
        assert_eq!(format(3.875, None, &t), "3 7/8");
        assert_eq!(format(1.6, None, &t), "1 3/5");
    }

    #[test]
    fn test_decimal_fallback() {
        let t = tables();
        assert_eq!(format(0.17, None, &t), "0.17");
        assert_eq!(format(236.588, None, &t), "236.59");
        assert_eq!(format(236.59, None, &t), "236.59");
    }

    #[test]
    fn test_decimal_fallback_places() {
        let t = tables();
        // below a tenth: one place
        assert_eq!(format(1.05, None, &t), "1.1");
        assert_eq!(format(2.04, None, &t), "2.0");
        assert_eq!(format(0.06, None, &t), "0.1");
        // a tenth or more: two places
        assert_eq!(format(1.1, None, &t), "1.10");
        assert_eq!(format(1.94, None, &t), "1.94");
        assert_eq!(format(1.06, Some("1½"), &t), "1.1");
    }

    #[test]
    fn test_unicode_fractions() {
        let t = tables();
        assert_eq!(format(1.5, Some("1½"), &t), "1½");
        assert_eq!(format(0.5, Some("¼"), &t), "½");
        assert_eq!(format(2.0 / 3.0, Some("⅓"), &t), "⅔");
        assert_eq!(format(1.0 / 6.0, Some("⅙"), &t), "⅙");
        // 0.29 is within 0.05 of ¼
        assert_eq!(format(1.29, Some("1¼"), &t), "1¼");
        // 0.94 is too far from ⅞
        assert_eq!(format(1.94, Some("1⅞"), &t), "1.94");
    }

    #[test]
    fn test_decimal_style() {
        let t = tables();
        assert_eq!(format(3.0, Some("1.5"), &t), "3");
        assert_eq!(format(2.5, Some("1.25"), &t), "2.5");
        assert_eq!(format(0.75, Some("0.25"), &t), "0.75");
    }

    #[test]
    fn test_style_from_hint() {
        let t = tables();
        assert_eq!(AmountStyle::from_hint(None, &t), AmountStyle::Fraction);
        assert_eq!(AmountStyle::from_hint(Some("1/2"), &t), AmountStyle::Fraction);
        assert_eq!(AmountStyle::from_hint(Some("2"), &t), AmountStyle::Fraction);
        assert_eq!(AmountStyle::from_hint(Some("2½"), &t), AmountStyle::UnicodeFraction);
        assert_eq!(AmountStyle::from_hint(Some("1.5"), &t), AmountStyle::Decimal);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(2.5), "2.5");
        assert_eq!(format_decimal(2.0), "2");
        assert_eq!(format_decimal(0.004), "0");
        assert_eq!(format_decimal(1.18294), "1.18");
    }
}
