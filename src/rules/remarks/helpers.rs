use crate::units::{Temperature, TemperatureUnit};

/// `snnn`: sign nibble (`0` positive, `1` negative) and tenths of a unit.
pub fn signed_tenths(sign: &str, tenths: &str) -> Option<f64> {
    let magnitude = tenths.parse::<f64>().ok()? / 10.0;
    match sign {
        "0" => Some(magnitude),
        "1" => Some(-magnitude),
        _ => None,
    }
}

pub fn tenths_celsius(sign: &str, tenths: &str) -> Option<Temperature> {
    Some(Temperature::new(signed_tenths(sign, tenths)?, TemperatureUnit::Celsius))
}

/// `SLPppp` carries the last three digits of the pressure in tenths of hPa.
/// The hundreds digit is whichever of 9 or 10 keeps the value near 1000 hPa.
pub fn sea_level_hpa(ppp: i64) -> f64 {
    let tail = ppp as f64 / 10.0;
    if tail >= 50.0 { 900.0 + tail } else { 1000.0 + tail }
}
