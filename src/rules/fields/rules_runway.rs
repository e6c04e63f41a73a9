//! Runway visual range: `R<rwy>/[P|M]nnnn[FT][V[P|M]nnnn[FT]][/N|U|D]`.
//!
//! Meters unless `FT` follows either bound; a range with `FT` on one bound
//! is in feet on both.

use super::helpers::first;
use crate::engine::ChunkShape;
use crate::report::{Comparator, RunwayVisibleRange, Tendency, Visibility};
use crate::units::{Distance, DistanceUnit};
use crate::{Groups, Rule};

fn bound(value: i64, comparator: Option<&str>, unit: DistanceUnit) -> Visibility {
    let comparator = match comparator {
        Some("P") => Some(Comparator::MoreThan),
        Some("M") => Some(Comparator::LessThan),
        _ => None,
    };
    Visibility::bounded(Distance::new(value as f64, unit), comparator)
}

pub fn rule_runway_visual_range() -> Rule<RunwayVisibleRange> {
    rule! {
        name: "runway visual range",
        pattern: [re!(r"^R(?P<runway>\d{2}[LCR]?)/(?P<low_cmp>[PM])?(?P<low>\d{4})(?P<low_ft>FT)?(?:V(?P<high_cmp>[PM])?(?P<high>\d{4})(?P<high_ft>FT)?)?(?:/?(?P<tendency>[NUD]))?$")],
        shape: ChunkShape::HAS_DIGITS | ChunkShape::HAS_SLASH,
        prod: |groups: &[Groups]| -> Option<RunwayVisibleRange> {
            let g = first(groups)?;
            let unit = if g.get("low_ft").is_some() || g.get("high_ft").is_some() {
                DistanceUnit::Feet
            } else {
                DistanceUnit::Meters
            };

            let visibility = bound(g.int("low")?, g.get("low_cmp"), unit);
            let secondary = g.int("high").map(|high| bound(high, g.get("high_cmp"), unit));
            let tendency = match g.get("tendency") {
                Some("N") => Some(Tendency::NoChange),
                Some("U") => Some(Tendency::Improving),
                Some("D") => Some(Tendency::Worsening),
                _ => None,
            };

            Some(RunwayVisibleRange { runway: g.get("runway")?.to_string(), visibility, secondary, tendency })
        },
    }
}

pub fn runway_rules() -> Vec<Rule<RunwayVisibleRange>> {
    vec![rule_runway_visual_range()]
}
