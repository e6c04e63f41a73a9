//! Sea level pressure: `Qdddd` in hPa, `Adddd` in hundredths of inHg.

use super::helpers::first;
use crate::units::{Pressure, PressureUnit};
use crate::{Groups, Rule};

pub fn rule_pressure() -> Rule<Pressure> {
    rule! {
        name: "pressure (Qdddd|Adddd)",
        pattern: [re!(r"^(?P<unit>[QA])(?P<value>\d{4}|////)$")],
        prod: |groups: &[Groups]| -> Option<Pressure> {
            let g = first(groups)?;
            let unit = match g.get("unit")? {
                "A" => PressureUnit::InchesOfMercury,
                _ => PressureUnit::Hectopascals,
            };

            let Some(value) = g.int("value") else {
                return Some(Pressure::unknown(unit));
            };
            let value = match unit {
                PressureUnit::InchesOfMercury => value as f64 / 100.0,
                PressureUnit::Hectopascals => value as f64,
            };
            Some(Pressure::new(value, unit))
        },
    }
}

pub fn pressure_rules() -> Vec<Rule<Pressure>> {
    vec![rule_pressure()]
}
