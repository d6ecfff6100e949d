//! Closed-form temperature conversion arithmetic.

use std::str::FromStr;

use tracing::debug;

use super::scale::Scale;

/// Convert `temp` from `scale` to `target_scale`.
///
/// Both scale names are expected pre-lowercased. Returns `None` when the
/// scales differ and either name is not a recognized scale.
///
/// The identity check runs on the raw strings, before any validation: a
/// matching pair of unrecognized names echoes the input back unchanged.
pub fn convert_temperature(temp: f64, scale: &str, target_scale: &str) -> Option<f64> {
    if scale == target_scale {
        return Some(temp);
    }

    let from = Scale::from_str(scale).ok()?;
    let to = Scale::from_str(target_scale).ok()?;

    let converted = convert(temp, from, to);
    debug!(temp, %from, %to, converted, "converted temperature");

    Some(converted)
}

/// Convert `temp` between two recognized scales.
///
/// Results carry native `f64` precision; no rounding is applied. Operations
/// are ordered left to right so repeated conversions are reproducible
/// bit-for-bit.
pub fn convert(temp: f64, from: Scale, to: Scale) -> f64 {
    match (from, to) {
        (Scale::Celsius, Scale::Fahrenheit) => temp * 9.0 / 5.0 + 32.0,
        (Scale::Celsius, Scale::Kelvin) => temp + 273.15,
        (Scale::Fahrenheit, Scale::Celsius) => (temp - 32.0) * 5.0 / 9.0,
        (Scale::Fahrenheit, Scale::Kelvin) => (temp - 32.0) * 5.0 / 9.0 + 273.15,
        (Scale::Kelvin, Scale::Celsius) => temp - 273.15,
        (Scale::Kelvin, Scale::Fahrenheit) => (temp - 273.15) * 9.0 / 5.0 + 32.0,
        (Scale::Celsius, Scale::Celsius)
        | (Scale::Fahrenheit, Scale::Fahrenheit)
        | (Scale::Kelvin, Scale::Kelvin) => temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn fahrenheit_to_celsius() {
        assert_close(convert_temperature(212.0, "fahrenheit", "celsius").unwrap(), 100.0);
        assert_close(convert_temperature(32.0, "fahrenheit", "celsius").unwrap(), 0.0);
        assert_close(convert_temperature(-40.0, "fahrenheit", "celsius").unwrap(), -40.0);
    }

    #[test]
    fn celsius_to_fahrenheit() {
        assert_close(convert_temperature(100.0, "celsius", "fahrenheit").unwrap(), 212.0);
        assert_close(convert_temperature(0.0, "celsius", "fahrenheit").unwrap(), 32.0);
        assert_close(convert_temperature(-40.0, "celsius", "fahrenheit").unwrap(), -40.0);
    }

    #[test]
    fn celsius_to_kelvin() {
        assert_close(convert_temperature(0.0, "celsius", "kelvin").unwrap(), 273.15);
        assert_close(convert_temperature(100.0, "celsius", "kelvin").unwrap(), 373.15);
    }

    #[test]
    fn fahrenheit_to_kelvin() {
        assert_close(convert_temperature(32.0, "fahrenheit", "kelvin").unwrap(), 273.15);
        assert_close(convert_temperature(-40.0, "fahrenheit", "kelvin").unwrap(), 233.15);
    }

    #[test]
    fn kelvin_to_celsius() {
        assert_close(convert_temperature(273.15, "kelvin", "celsius").unwrap(), 0.0);
        assert_close(convert_temperature(373.15, "kelvin", "celsius").unwrap(), 100.0);
        assert_close(convert_temperature(233.15, "kelvin", "celsius").unwrap(), -40.0);
    }

    #[test]
    fn kelvin_to_fahrenheit() {
        assert_close(convert_temperature(273.15, "kelvin", "fahrenheit").unwrap(), 32.0);
        assert_close(convert_temperature(373.15, "kelvin", "fahrenheit").unwrap(), 212.0);
        assert_close(convert_temperature(233.15, "kelvin", "fahrenheit").unwrap(), -40.0);
    }

    #[test]
    fn identity_for_every_scale() {
        for scale in Scale::iter() {
            let name = scale.to_string();
            assert_eq!(convert_temperature(37.5, &name, &name), Some(37.5));
        }
    }

    #[test]
    fn identity_for_unrecognized_matching_pair() {
        // Matching names short-circuit before validation.
        assert_eq!(convert_temperature(42.0, "bogus", "bogus"), Some(42.0));
    }

    #[test]
    fn round_trips_for_all_scale_pairs() {
        for from in Scale::iter() {
            for to in Scale::iter() {
                let there = convert(19.75, from, to);
                let back = convert(there, to, from);
                assert_close(back, 19.75);
            }
        }
    }

    #[test]
    fn unknown_scale_returns_none() {
        assert_eq!(convert_temperature(100.0, "unknown", "celsius"), None);
        assert_eq!(convert_temperature(100.0, "celsius", "unknown"), None);
        assert_eq!(convert_temperature(100.0, "reaumur", "rankine"), None);
    }

    #[test]
    fn negative_kelvin_passes_through() {
        // No physical-bounds checking on input values.
        assert_close(convert_temperature(-10.0, "kelvin", "celsius").unwrap(), -283.15);
    }
}
