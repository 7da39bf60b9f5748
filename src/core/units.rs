//! Weight conversion between stored kilograms and the configured unit system.
//! Height is always entered and shown in centimetres.

use crate::models::config::Units;

const KG_TO_LBS: f64 = 2.20462;

/// Stored kilograms as display value + unit string.
pub fn to_display(kg: f64, units: &Units) -> (f64, &'static str) {
    if units.is_imperial() {
        (round1(kg * KG_TO_LBS), "lbs")
    } else {
        (kg, "kg")
    }
}

pub fn display_unit(units: &Units) -> &'static str {
    to_display(0.0, units).1
}

/// A kg/week rate in display units per week.
pub fn to_display_rate(rate: f64, units: &Units) -> f64 {
    if units.is_imperial() {
        round1(rate * KG_TO_LBS)
    } else {
        rate
    }
}

/// User input in the configured unit system, converted to kilograms.
pub fn from_input(value: f64, units: &Units) -> f64 {
    if units.is_imperial() {
        value / KG_TO_LBS
    } else {
        value
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_is_passthrough() {
        let units = Units::default();
        assert_eq!(to_display(80.0, &units), (80.0, "kg"));
        assert_eq!(from_input(80.0, &units), 80.0);
        assert_eq!(to_display_rate(-0.5, &units), -0.5);
    }

    #[test]
    fn test_imperial_weight() {
        let units = Units::imperial();
        assert_eq!(to_display(80.0, &units), (176.4, "lbs"));
        assert!((from_input(176.4, &units) - 80.01).abs() < 0.01);
        assert_eq!(to_display_rate(-0.5, &units), -1.1);
        assert_eq!(display_unit(&units), "lbs");
    }
}
