//! Shared conversions for field productions.

use crate::Groups;
use crate::units::{Distance, DistanceUnit, Speed, SpeedUnit, Temperature, TemperatureUnit};

/// Meters per hundred feet: cloud heights are reported in hundreds of feet.
pub const METERS_PER_HUNDRED_FEET: f64 = 30.48;

/// Return the first group of a single-chunk match.
pub fn first(groups: &[Groups]) -> Option<&Groups> {
    groups.first().filter(|g| g.is_present())
}

/// Speed unit suffix; no suffix means km/h.
pub fn speed_unit(code: Option<&str>) -> SpeedUnit {
    match code {
        Some("KT") => SpeedUnit::Knots,
        Some("MPS") => SpeedUnit::MetersPerSecond,
        _ => SpeedUnit::KilometersPerHour,
    }
}

/// Speed digits, or unknown for `//`.
pub fn speed(text: &str, unit: SpeedUnit) -> Option<Speed> {
    if text.bytes().all(|b| b == b'/') {
        return Some(Speed::unknown(unit));
    }
    Some(Speed::new(text.parse::<f64>().ok()?, unit))
}

/// A three digit height in hundreds of feet, as meters. `///` is unknown.
pub fn hundreds_of_feet(text: &str) -> Option<Distance> {
    if text.bytes().all(|b| b == b'/') {
        return Some(Distance::unknown(DistanceUnit::Meters));
    }
    let hundreds = text.parse::<f64>().ok()?;
    Some(Distance::new(hundreds * METERS_PER_HUNDRED_FEET, DistanceUnit::Meters))
}

/// Whole degrees Celsius with an optional `M` (minus) prefix.
/// `XX` and `//` are unknown.
pub fn whole_celsius(text: &str) -> Option<Temperature> {
    if text == "XX" || text == "//" {
        return Some(Temperature::unknown(TemperatureUnit::Celsius));
    }
    let (sign, digits) = match text.strip_prefix('M') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text),
    };
    let value = digits.parse::<f64>().ok()?;
    Some(Temperature::new(sign * value, TemperatureUnit::Celsius))
}

/// Meters from a digit string.
pub fn meters(text: &str) -> Option<Distance> {
    Some(Distance::new(text.parse::<f64>().ok()?, DistanceUnit::Meters))
}
