//! Surface wind and directional variation.
//!
//! ```text
//! dddff[Gfmfm][KT|MPS|KMH]    bearing, speed, optional gust
//! VRBff[Gfmfm][unit]           variable direction
//! ///ff[unit]  ////ff  /////    direction (and speed) not reported
//! dddVddd                      extreme directions of a variable wind
//! ```
//!
//! No unit suffix means km/h. A bearing above 360 is not a wind group (it is
//! some other field that happens to share the digit layout), so the rule
//! declines instead of clamping.

use super::helpers::{first, speed, speed_unit};
use crate::engine::ChunkShape;
use crate::report::{VariableWind, Wind, WindDirection};
use crate::units::Direction;
use crate::{Groups, Rule};

fn gust(g: &Groups, unit: crate::units::SpeedUnit) -> Option<crate::units::Speed> {
    g.get("gust").and_then(|text| speed(text, unit))
}

pub fn rule_wind_bearing() -> Rule<Wind> {
    rule! {
        name: "wind (dddff)",
        pattern: [re!(r"^(?P<direction>\d{3})(?P<speed>\d{2,3})(?:G(?P<gust>\d{2,3}))?(?P<unit>KT|MPS|KMH)?$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<Wind> {
            let g = first(groups)?;
            let degrees = g.int("direction")?;
            if degrees > 360 {
                return None;
            }
            let unit = speed_unit(g.get("unit"));

            Some(Wind {
                direction: WindDirection::Bearing(Direction::new(degrees as f64)),
                speed: speed(g.get("speed")?, unit)?,
                gust: gust(g, unit),
            })
        },
    }
}

pub fn rule_wind_variable() -> Rule<Wind> {
    rule! {
        name: "wind (VRBff)",
        pattern: [re!(r"^VRB(?P<speed>\d{2,3})(?:G(?P<gust>\d{2,3}))?(?P<unit>KT|MPS|KMH)?$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<Wind> {
            let g = first(groups)?;
            let unit = speed_unit(g.get("unit"));

            Some(Wind { direction: WindDirection::Variable, speed: speed(g.get("speed")?, unit)?, gust: gust(g, unit) })
        },
    }
}

pub fn rule_wind_unknown_direction() -> Rule<Wind> {
    rule! {
        name: "wind (///ff)",
        pattern: [re!(r"^/{3,4}(?P<speed>\d{2,3}|//)(?:G(?P<gust>\d{2,3}))?(?P<unit>KT|MPS|KMH)?$")],
        shape: ChunkShape::HAS_SLASH,
        prod: |groups: &[Groups]| -> Option<Wind> {
            let g = first(groups)?;
            let unit = speed_unit(g.get("unit"));

            Some(Wind {
                direction: WindDirection::Bearing(Direction::unknown()),
                speed: speed(g.get("speed")?, unit)?,
                gust: gust(g, unit),
            })
        },
    }
}

pub fn rule_variable_wind() -> Rule<VariableWind> {
    rule! {
        name: "variable wind (dddVddd)",
        pattern: [re!(r"^(?P<from>\d{3})V(?P<to>\d{3})$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<VariableWind> {
            let g = first(groups)?;
            Some(VariableWind { from: Direction::new(g.int("from")? as f64), to: Direction::new(g.int("to")? as f64) })
        },
    }
}

pub fn wind_rules() -> Vec<Rule<Wind>> {
    vec![rule_wind_bearing(), rule_wind_variable(), rule_wind_unknown_direction()]
}

pub fn variable_wind_rules() -> Vec<Rule<VariableWind>> {
    vec![rule_variable_wind()]
}
