//! Report header: type, location, time, NIL and observer groups.

use super::helpers::first;
use crate::engine::ChunkShape;
use crate::report::{ObservationTime, Observer, ReportKind};
use crate::{Groups, Rule};

/// `METAR` / `SPECI`
pub fn rule_report_kind() -> Rule<ReportKind> {
    rule! {
        name: "report kind",
        pattern: [re!(r"^(?P<kind>METAR|SPECI)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<ReportKind> {
            match first(groups)?.get("kind")? {
                "METAR" => Some(ReportKind::Metar),
                "SPECI" => Some(ReportKind::Speci),
                _ => None,
            }
        },
    }
}

/// Four character location indicator starting with a letter.
pub fn rule_station() -> Rule<String> {
    rule! {
        name: "station (cccc)",
        pattern: [re!(r"^(?P<station>[A-Z][A-Z0-9]{3})$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<String> {
            Some(first(groups)?.get("station")?.to_string())
        },
    }
}

/// `ddhhmmZ`
pub fn rule_datetime() -> Rule<ObservationTime> {
    rule! {
        name: "datetime (ddhhmmZ)",
        pattern: [re!(r"^(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})Z$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<ObservationTime> {
            let g = first(groups)?;
            let day = g.int("day")? as u32;
            let hour = g.int("hour")? as u32;
            let minute = g.int("minute")? as u32;

            if !(1..=31).contains(&day) || hour > 23 || minute > 59 {
                return None;
            }

            Some(ObservationTime { day, hour, minute })
        },
    }
}

/// `NIL`: the report is missing.
pub fn rule_nil() -> Rule<()> {
    rule! {
        name: "nil report",
        pattern: [re!(r"^NIL$")],
        prod: |_groups: &[Groups]| -> Option<()> { Some(()) },
    }
}

/// `AUTO`, `COR`, `CCA`..`CCZ`, `RTD`
pub fn rule_observer() -> Rule<Observer> {
    rule! {
        name: "observer",
        pattern: [re!(r"^(?P<observer>AUTO|COR|CC[A-Z]|RTD)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Observer> {
            match first(groups)?.get("observer")? {
                "AUTO" => Some(Observer::Auto),
                "RTD" => Some(Observer::Delayed),
                _ => Some(Observer::Corrected),
            }
        },
    }
}

pub fn report_kind_rules() -> Vec<Rule<ReportKind>> {
    vec![rule_report_kind()]
}

pub fn station_rules() -> Vec<Rule<String>> {
    vec![rule_station()]
}

pub fn datetime_rules() -> Vec<Rule<ObservationTime>> {
    vec![rule_datetime()]
}

pub fn nil_rules() -> Vec<Rule<()>> {
    vec![rule_nil()]
}

pub fn observer_rules() -> Vec<Rule<Observer>> {
    vec![rule_observer()]
}
