//! Present and recent weather groups.
//!
//! `[+|-][VC][descriptor](phenomenon){0,2}` with at least a descriptor or a
//! phenomenon. The `RE` prefix of recent weather is stripped by the decoder
//! before this table is tried.

use super::helpers::first;
use crate::engine::ChunkShape;
use crate::report::{Descriptor, Intensity, Phenomenon, WeatherPhenomenon};
use crate::{Groups, Rule};

/// Split a run of two-letter phenomenon codes.
fn phenomena(codes: &str) -> Option<Vec<Phenomenon>> {
    codes
        .as_bytes()
        .chunks(2)
        .map(|pair| std::str::from_utf8(pair).ok().and_then(Phenomenon::from_code))
        .collect()
}

pub fn rule_weather() -> Rule<WeatherPhenomenon> {
    rule! {
        name: "weather",
        pattern: [re!(r"^(?P<intensity>[-+])?(?P<vicinity>VC)?(?P<descriptor>MI|PR|BC|DR|BL|SH|TS|FZ)?(?P<phenomena>(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY|PO|SQ|FC|SS|DS){0,2})$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<WeatherPhenomenon> {
            let g = first(groups)?;
            let descriptor = g.get("descriptor").and_then(Descriptor::from_code);
            let phenomena = g.get("phenomena").map_or(Some(Vec::new()), phenomena)?;

            if descriptor.is_none() && phenomena.is_empty() {
                return None;
            }

            let intensity = match g.get("intensity") {
                Some("-") => Intensity::Light,
                Some("+") => Intensity::Heavy,
                _ => Intensity::Moderate,
            };

            Some(WeatherPhenomenon {
                intensity,
                in_vicinity: g.get("vicinity").is_some(),
                descriptor,
                phenomena,
                recent: false,
            })
        },
    }
}

pub fn rule_no_significant_weather() -> Rule<WeatherPhenomenon> {
    rule! {
        name: "weather (NSW)",
        pattern: [re!(r"^NSW$")],
        prod: |_groups: &[Groups]| -> Option<WeatherPhenomenon> {
            Some(WeatherPhenomenon::no_significant_weather())
        },
    }
}

pub fn weather_rules() -> Vec<Rule<WeatherPhenomenon>> {
    vec![rule_no_significant_weather(), rule_weather()]
}
