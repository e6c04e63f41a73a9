//! Temperature and dew point: `(M?dd|XX|//)/(M?dd|XX|//)?`.
//!
//! Either side may be unknown on its own. A missing dew point after the
//! slash is read as unknown as well.

use super::helpers::{first, whole_celsius};
use crate::engine::ChunkShape;
use crate::units::{Temperature, TemperatureUnit};
use crate::{Groups, Rule};

pub fn rule_temperature_dew_point() -> Rule<(Temperature, Temperature)> {
    rule! {
        name: "temperature/dew point",
        pattern: [re!(r"^(?P<temperature>M?\d+|XX|//)/(?P<dew_point>M?\d+|XX|//)?$")],
        shape: ChunkShape::HAS_SLASH,
        prod: |groups: &[Groups]| -> Option<(Temperature, Temperature)> {
            let g = first(groups)?;
            let temperature = whole_celsius(g.get("temperature")?)?;
            let dew_point = match g.get("dew_point") {
                Some(text) => whole_celsius(text)?,
                None => Temperature::unknown(TemperatureUnit::Celsius),
            };
            Some((temperature, dew_point))
        },
    }
}

pub fn temperature_rules() -> Vec<Rule<(Temperature, Temperature)>> {
    vec![rule_temperature_dew_point()]
}
