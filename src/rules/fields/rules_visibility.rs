//! Prevailing and minimum visibility.
//!
//! Alternatives in priority order; several are prefixes of one another:
//!
//! ```text
//! 9999            10 km or more
//! ddddNDV         no directional variation available
//! n n/dSM         whole and fractional statute miles (two chunks)
//! [M|P]n/dSM      fractional miles, M = less than
//! [M|P]nSM        whole miles, P6SM = more than 6 mi
//! ddKM            kilometers
//! dddd            meters
//! dddd<compass>   meters towards one of 16 compass points
//! ```

use super::helpers::{first, meters};
use crate::engine::ChunkShape;
use crate::report::{Comparator, Visibility};
use crate::units::{Direction, Distance, DistanceUnit};
use crate::{Groups, Rule};

fn comparator(code: Option<&str>) -> Option<Comparator> {
    match code {
        Some("P") => Some(Comparator::MoreThan),
        Some("M") => Some(Comparator::LessThan),
        _ => None,
    }
}

fn fraction(g: &Groups) -> Option<f64> {
    let numerator = g.int("numerator")?;
    let denominator = g.int("denominator")?;
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

pub fn rule_ten_km_or_more() -> Rule<Visibility> {
    rule! {
        name: "visibility (9999)",
        pattern: [re!(r"^9999$")],
        shape: ChunkShape::ALL_DIGITS,
        prod: |_groups: &[Groups]| -> Option<Visibility> {
            Some(Visibility::bounded(Distance::new(10.0, DistanceUnit::Kilometers), Some(Comparator::MoreThan)))
        },
    }
}

pub fn rule_no_directional_variation() -> Rule<Visibility> {
    rule! {
        name: "visibility (ddddNDV)",
        pattern: [re!(r"^(?P<meters>\d{4})NDV$")],
        shape: ChunkShape::HAS_DIGITS | ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            Some(Visibility::new(meters(first(groups)?.get("meters")?)?))
        },
    }
}

pub fn rule_whole_and_fraction_miles() -> Rule<Visibility> {
    rule! {
        name: "visibility (n n/dSM)",
        pattern: [re!(r"^(?P<whole>\d{1,2})$"), re!(r"^(?P<numerator>\d)/(?P<denominator>\d{1,2})SM$")],
        shape: ChunkShape::ALL_DIGITS,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            let whole = groups[0].int("whole")? as f64;
            let miles = whole + fraction(&groups[1])?;
            Some(Visibility::new(Distance::new(miles, DistanceUnit::StatuteMiles)))
        },
    }
}

pub fn rule_fraction_miles() -> Rule<Visibility> {
    rule! {
        name: "visibility (n/dSM)",
        pattern: [re!(r"^(?P<comparator>[MP])?(?P<numerator>\d)/(?P<denominator>\d{1,2})SM$")],
        shape: ChunkShape::HAS_DIGITS | ChunkShape::HAS_SLASH,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            let g = first(groups)?;
            let distance = Distance::new(fraction(g)?, DistanceUnit::StatuteMiles);
            Some(Visibility::bounded(distance, comparator(g.get("comparator"))))
        },
    }
}

pub fn rule_whole_miles() -> Rule<Visibility> {
    rule! {
        name: "visibility (nSM)",
        pattern: [re!(r"^(?P<comparator>[MP])?(?P<miles>\d{1,2})SM$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            let g = first(groups)?;
            let distance = Distance::new(g.int("miles")? as f64, DistanceUnit::StatuteMiles);
            Some(Visibility::bounded(distance, comparator(g.get("comparator"))))
        },
    }
}

pub fn rule_kilometers() -> Rule<Visibility> {
    rule! {
        name: "visibility (ddKM)",
        pattern: [re!(r"^(?P<km>\d{1,4})KM$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            let km = first(groups)?.int("km")? as f64;
            Some(Visibility::new(Distance::new(km, DistanceUnit::Kilometers)))
        },
    }
}

pub fn rule_meters() -> Rule<Visibility> {
    rule! {
        name: "visibility (dddd)",
        pattern: [re!(r"^(?P<meters>\d{4})$")],
        shape: ChunkShape::ALL_DIGITS,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            Some(Visibility::new(meters(first(groups)?.get("meters")?)?))
        },
    }
}

pub fn rule_meters_towards() -> Rule<Visibility> {
    rule! {
        name: "visibility (dddd + compass)",
        pattern: [re!(r"^(?P<meters>\d{3,4})(?P<compass>[NESW]{1,3})$")],
        shape: ChunkShape::HAS_DIGITS | ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Visibility> {
            let g = first(groups)?;
            let direction = Direction::from_compass(g.get("compass")?)?;
            Some(Visibility::new(meters(g.get("meters")?)?).towards(direction))
        },
    }
}

pub fn visibility_rules() -> Vec<Rule<Visibility>> {
    vec![
        rule_ten_km_or_more(),
        rule_no_directional_variation(),
        rule_whole_and_fraction_miles(),
        rule_fraction_miles(),
        rule_whole_miles(),
        rule_kilometers(),
        rule_meters(),
        rule_meters_towards(),
    ]
}
