use crate::engine::ChunkShape;
use crate::report::{
    ColorState, Extreme, Lightning, LightningFrequency, LightningLocation, LightningType, Remark, Sensor, StationType,
    TemperatureExtreme,
};
use crate::units::{Direction, Distance, DistanceUnit, Pressure, PressureUnit};
use crate::{Groups, Rule};

use crate::rules::remarks::helpers::{sea_level_hpa, tenths_celsius};

fn single(groups: &[Groups]) -> Option<&Groups> {
    groups.first().filter(|g| g.is_present())
}

// --- Temperature ----------------------------------------------------------------

/// `1snnn` six-hour maximum, `2snnn` six-hour minimum.
pub fn rule_temperature_extreme() -> Rule<Remark> {
    rule! {
        name: "temperature extreme (1snnn|2snnn)",
        pattern: [re!(r"^(?P<kind>[12])(?P<sign>[01])(?P<tenths>\d{3})$")],
        shape: ChunkShape::ALL_DIGITS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let g = single(groups)?;
            let extreme = if g.get("kind")? == "1" { Extreme::Maximum } else { Extreme::Minimum };
            let temperature = tenths_celsius(g.get("sign")?, g.get("tenths")?)?;
            Some(Remark::TemperatureExtreme(TemperatureExtreme { extreme, period_hours: 6, temperature }))
        },
    }
}

/// `4snnnsnnn`: 24-hour maximum then minimum.
pub fn rule_min_max_24h() -> Rule<Remark> {
    rule! {
        name: "24h min/max (4snnnsnnn)",
        pattern: [re!(r"^4(?P<max_sign>[01])(?P<max>\d{3})(?P<min_sign>[01])(?P<min>\d{3})$")],
        shape: ChunkShape::ALL_DIGITS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let g = single(groups)?;
            let maximum = TemperatureExtreme {
                extreme: Extreme::Maximum,
                period_hours: 24,
                temperature: tenths_celsius(g.get("max_sign")?, g.get("max")?)?,
            };
            let minimum = TemperatureExtreme {
                extreme: Extreme::Minimum,
                period_hours: 24,
                temperature: tenths_celsius(g.get("min_sign")?, g.get("min")?)?,
            };
            Some(Remark::MinMax24h { maximum, minimum })
        },
    }
}

/// `Tsnnn[snnn]`: hourly temperature and dew point in tenths.
pub fn rule_hourly_temperature() -> Rule<Remark> {
    rule! {
        name: "hourly temperature (Tsnnnsnnn)",
        pattern: [re!(r"^T(?P<t_sign>[01])(?P<t>\d{3})(?:(?P<d_sign>[01])(?P<d>\d{3}))?$")],
        shape: ChunkShape::HAS_DIGITS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let g = single(groups)?;
            let temperature = tenths_celsius(g.get("t_sign")?, g.get("t")?)?;
            let dew_point = match (g.get("d_sign"), g.get("d")) {
                (Some(sign), Some(tenths)) => Some(tenths_celsius(sign, tenths)?),
                _ => None,
            };
            Some(Remark::HourlyTemperature { temperature, dew_point })
        },
    }
}

// --- Pressure -------------------------------------------------------------------

/// `5appp`: tendency character and three-hour change in tenths of hPa.
pub fn rule_pressure_tendency() -> Rule<Remark> {
    rule! {
        name: "pressure tendency (5appp)",
        pattern: [re!(r"^5(?P<character>[0-8])(?P<change>\d{3})$")],
        shape: ChunkShape::ALL_DIGITS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let g = single(groups)?;
            let character = g.int("character")? as u8;
            let change = Pressure::new(g.int("change")? as f64 / 10.0, PressureUnit::Hectopascals);
            Some(Remark::PressureTendency { character, change })
        },
    }
}

pub fn rule_sea_level_pressure() -> Rule<Remark> {
    rule! {
        name: "sea level pressure (SLPppp)",
        pattern: [re!(r"^SLP(?P<value>\d{3}|NO)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let pressure = match single(groups)?.int("value") {
                Some(ppp) => Pressure::new(sea_level_hpa(ppp), PressureUnit::Hectopascals),
                None => Pressure::unknown(PressureUnit::Hectopascals),
            };
            Some(Remark::SeaLevelPressure(pressure))
        },
    }
}

// --- Precipitation ----------------------------------------------------------------

/// `Prrrr` hourly, `6rrrr` three or six hours, `7rrrr` 24 hours, in hundredths
/// of an inch. The `6` group is emitted as six hours and narrowed once the
/// observation time is known.
pub fn rule_precipitation() -> Rule<Remark> {
    rule! {
        name: "precipitation (Prrrr|6rrrr|7rrrr)",
        pattern: [re!(r"^(?P<group>[P67])(?P<amount>\d{4}|////)$")],
        prod: |groups: &[Groups]| -> Option<Remark> {
            let g = single(groups)?;
            let period = match g.get("group")? {
                "P" => 1,
                "6" => 6,
                _ => 24,
            };
            let amount = match g.int("amount") {
                Some(hundredths) => Distance::new(hundredths as f64 / 100.0, DistanceUnit::Inches),
                None => Distance::unknown(DistanceUnit::Inches),
            };
            Some(Remark::Precipitation { period, amount })
        },
    }
}

// --- Station and sensors -------------------------------------------------------------

/// `AO1`/`AO2`, also spelled with a zero.
pub fn rule_station_type() -> Rule<Remark> {
    rule! {
        name: "automated station type (AO1|AO2)",
        pattern: [re!(r"^A[O0](?P<kind>[12])$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let kind = match single(groups)?.get("kind")? {
                "1" => StationType::WithoutPrecipitationDiscriminator,
                _ => StationType::WithPrecipitationDiscriminator,
            };
            Some(Remark::AutomatedStationType(kind))
        },
    }
}

pub fn rule_sensor_status() -> Rule<Remark> {
    rule! {
        name: "sensor status",
        pattern: [re!(r"^(?P<sensor>RVRNO|PWINO|PNO|FZRANO|TSNO)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let sensor = match single(groups)?.get("sensor")? {
                "RVRNO" => Sensor::RunwayVisualRange,
                "PWINO" => Sensor::PresentWeather,
                "PNO" => Sensor::PrecipitationGauge,
                "FZRANO" => Sensor::FreezingRain,
                _ => Sensor::Lightning,
            };
            Some(Remark::SensorStatus(sensor))
        },
    }
}

/// `VISNO RWY06`, `CHINO`: secondary visibility or ceiling sensor, with an
/// optional location.
pub fn rule_secondary_sensor_status() -> Rule<Remark> {
    rule! {
        name: "sensor status (VISNO|CHINO)",
        pattern: [
            re!(r"^(?P<sensor>VISNO|CHINO)$"),
            opt!(r"^(?P<location>RWY\d{2}[LCR]?|[NESW]{1,3})$"),
        ],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let location = groups.get(1).and_then(|g| g.get("location")).map(str::to_string);
            let sensor = match groups[0].get("sensor")? {
                "VISNO" => Sensor::Visibility(location),
                _ => Sensor::Ceiling(location),
            };
            Some(Remark::SensorStatus(sensor))
        },
    }
}

pub fn rule_color_code() -> Rule<Remark> {
    rule! {
        name: "color code",
        pattern: [re!(r"^(?P<black>BLACK)?(?P<color>BLU|WHT|GRN|YLO1|YLO2|YLO|AMB|RED)$")],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let g = single(groups)?;
            let state = match g.get("color")? {
                "BLU" => ColorState::Blue,
                "WHT" => ColorState::White,
                "GRN" => ColorState::Green,
                "YLO1" => ColorState::Yellow1,
                "YLO2" => ColorState::Yellow2,
                "YLO" => ColorState::Yellow,
                "AMB" => ColorState::Amber,
                _ => ColorState::Red,
            };
            Some(Remark::ColorCode { state, black: g.get("black").is_some() })
        },
    }
}

pub fn rule_maintenance() -> Rule<Remark> {
    rule! {
        name: "maintenance needed ($)",
        pattern: [re!(r"^\$$")],
        prod: |_groups: &[Groups]| -> Option<Remark> { Some(Remark::MaintenanceNeeded) },
    }
}

// --- Lightning ------------------------------------------------------------------------

fn lightning_types(codes: &str) -> Vec<LightningType> {
    codes
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| match pair {
            b"IC" => Some(LightningType::InCloud),
            b"CC" => Some(LightningType::CloudToCloud),
            b"CG" => Some(LightningType::CloudToGround),
            b"CA" => Some(LightningType::CloudToAir),
            _ => None,
        })
        .collect()
}

/// `[OCNL|FRQ|CONS] LTG[IC|CC|CG|CA]* [OHD|VC|DSNT|ALQDS] [dir[-dir]]`
pub fn rule_lightning() -> Rule<Remark> {
    rule! {
        name: "lightning",
        pattern: [
            opt!(r"^(?P<frequency>OCNL|FRQ|CONS)$"),
            re!(r"^LTG(?P<types>(?:IC|CC|CG|CA)*)$"),
            opt!(r"^(?P<location>OHD|VC|DSNT|ALQDS)$"),
            opt!(r"^(?P<from>N|NNE|NE|ENE|E|ESE|SE|SSE|S|SSW|SW|WSW|W|WNW|NW|NNW)(?:-(?P<to>N|NNE|NE|ENE|E|ESE|SE|SSE|S|SSW|SW|WSW|W|WNW|NW|NNW))?$"),
        ],
        shape: ChunkShape::HAS_LETTERS,
        prod: |groups: &[Groups]| -> Option<Remark> {
            let frequency = match groups[0].get("frequency") {
                Some("OCNL") => Some(LightningFrequency::Occasional),
                Some("FRQ") => Some(LightningFrequency::Frequent),
                Some("CONS") => Some(LightningFrequency::Continuous),
                _ => None,
            };
            let types = groups[1].get("types").map(lightning_types).unwrap_or_default();
            let location = match groups[2].get("location") {
                Some("OHD") => Some(LightningLocation::Overhead),
                Some("VC") => Some(LightningLocation::Vicinity),
                Some("DSNT") => Some(LightningLocation::Distant),
                Some("ALQDS") => Some(LightningLocation::AllQuadrants),
                _ => None,
            };
            let directions = [groups[3].get("from"), groups[3].get("to")]
                .into_iter()
                .flatten()
                .map(Direction::from_compass)
                .collect::<Option<Vec<_>>>()?;

            Some(Remark::Lightning(Lightning { frequency, types, location, directions }))
        },
    }
}

/// Remark rules in priority order.
pub fn remark_rules() -> Vec<Rule<Remark>> {
    vec![
        rule_temperature_extreme(),
        rule_min_max_24h(),
        rule_pressure_tendency(),
        rule_precipitation(),
        rule_station_type(),
        rule_sea_level_pressure(),
        rule_hourly_temperature(),
        rule_sensor_status(),
        rule_secondary_sensor_status(),
        rule_color_code(),
        rule_maintenance(),
        rule_lightning(),
    ]
}
