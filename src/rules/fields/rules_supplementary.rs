//! Groups after recent weather: wind shear, density altitude and the trend
//! forecast, plus the `CAVOK` literal.

use super::helpers::first;
use crate::engine::ChunkShape;
use crate::report::WindShear;
use crate::units::{Distance, DistanceUnit};
use crate::{Groups, Rule};

/// Head of a trend group. `BECMG` and `TEMPO` are followed by a forecast
/// that the decoder keeps verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    NoSignificantChange,
    Becoming,
    Temporary,
}

pub fn rule_cavok() -> Rule<()> {
    rule! {
        name: "CAVOK",
        pattern: [re!(r"^CAVOK$")],
        prod: |_groups: &[Groups]| -> Option<()> { Some(()) },
    }
}

/// `WS R26L`, `WS RWY26L`
pub fn rule_wind_shear_runway() -> Rule<WindShear> {
    rule! {
        name: "wind shear (runway)",
        pattern: [re!(r"^WS$"), re!(r"^R(?:WY)?(?P<runway>\d{2}[LCR]?)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<WindShear> {
            Some(WindShear::Runway(groups[1].get("runway")?.to_string()))
        },
    }
}

/// `WS ALL RWY`
pub fn rule_wind_shear_all() -> Rule<WindShear> {
    rule! {
        name: "wind shear (all runways)",
        pattern: [re!(r"^WS$"), re!(r"^ALL$"), re!(r"^RWY$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |_groups: &[Groups]| -> Option<WindShear> { Some(WindShear::AllRunways) },
    }
}

/// `DENSITY ALT 4200FT`
pub fn rule_density_altitude() -> Rule<Distance> {
    rule! {
        name: "density altitude",
        pattern: [re!(r"^DENSITY$"), re!(r"^ALT$"), re!(r"^(?P<feet>\d{1,5})FT$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Distance> {
            Some(Distance::new(groups[2].int("feet")? as f64, DistanceUnit::Feet))
        },
    }
}

pub fn rule_trend() -> Rule<TrendKind> {
    rule! {
        name: "trend",
        pattern: [re!(r"^(?P<trend>NOSIG|BECMG|TEMPO)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<TrendKind> {
            match first(groups)?.get("trend")? {
                "NOSIG" => Some(TrendKind::NoSignificantChange),
                "BECMG" => Some(TrendKind::Becoming),
                _ => Some(TrendKind::Temporary),
            }
        },
    }
}

pub fn cavok_rules() -> Vec<Rule<()>> {
    vec![rule_cavok()]
}

pub fn wind_shear_rules() -> Vec<Rule<WindShear>> {
    vec![rule_wind_shear_all(), rule_wind_shear_runway()]
}

pub fn density_altitude_rules() -> Vec<Rule<Distance>> {
    vec![rule_density_altitude()]
}

pub fn trend_rules() -> Vec<Rule<TrendKind>> {
    vec![rule_trend()]
}
