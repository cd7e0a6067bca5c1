//! Conversion engine: category dispatch, input parsing and output rendering.

use crate::catalog::{convert_fuel_efficiency, convert_temperature, ConversionRule, UnitOption};

/// Fractional digits shown when nothing else is configured.
pub const DEFAULT_FRACTION_DIGITS: usize = 10;

/// Upper bound accepted for the configured fraction digits.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Convert `value` from one unit to another within `category`.
///
/// Temperature and Fuel Efficiency go through their dedicated formulas keyed by
/// unit name; every other category is a change of basis through the base unit.
pub fn convert(category: &str, value: f64, from: &UnitOption, to: &UnitOption) -> f64 {
    match ConversionRule::for_category(category) {
        ConversionRule::Temperature => convert_temperature(value, from.name, to.name),
        ConversionRule::FuelEfficiency => convert_fuel_efficiency(value, from.name, to.name),
        ConversionRule::Linear => (value * from.factor) / to.factor,
    }
}

/// Parse raw input text. Returns `None` for anything that is not a finite number.
pub fn parse_input(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Render with at most `max_fraction_digits` fractional digits, trailing zeros
/// and a dangling decimal point removed. No grouping, no exponent.
pub fn format_value(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let mut text = format!("{:.*}", max_fraction_digits, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

/// Parse, convert and render in one step. `None` when the text is unparsable.
pub fn convert_text(
    category: &str,
    text: &str,
    from: &UnitOption,
    to: &UnitOption,
    max_fraction_digits: usize,
) -> Option<String> {
    let value = parse_input(text)?;
    let converted = convert(category, value, from, to);
    Some(format_value(converted, max_fraction_digits))
}
