use super::REMARKS;
use crate::engine::{first_match, scan_chunks};
use crate::report::{
    ColorState, Extreme, Lightning, LightningFrequency, LightningLocation, LightningType, Remark, Sensor, StationType,
    TemperatureExtreme,
};
use crate::units::{Direction, DistanceUnit, Temperature, TemperatureUnit};

fn remark(text: &str) -> Option<(Remark, usize)> {
    first_match(&REMARKS, &scan_chunks(text)).map(|h| (h.value, h.consumed))
}

fn single(text: &str) -> Remark {
    let (remark, consumed) = remark(text).unwrap_or_else(|| panic!("remark should match: {}", text));
    assert_eq!(consumed, 1, "{} should consume one chunk", text);
    remark
}

fn celsius(value: f64) -> Temperature {
    Temperature::new(value, TemperatureUnit::Celsius)
}

#[test]
fn min_max_24h_sign_nibbles() {
    let expected = Remark::MinMax24h {
        maximum: TemperatureExtreme { extreme: Extreme::Maximum, period_hours: 24, temperature: celsius(4.6) },
        minimum: TemperatureExtreme { extreme: Extreme::Minimum, period_hours: 24, temperature: celsius(-0.6) },
    };
    assert_eq!(single("400461006"), expected);
}

#[test]
fn six_hour_extremes() {
    let cases: Vec<(Extreme, f64, &str)> = vec![
        (Extreme::Maximum, 14.2, "10142"),
        (Extreme::Maximum, -2.1, "11021"),
        (Extreme::Minimum, 0.0, "20000"),
        (Extreme::Minimum, -12.5, "21125"),
    ];
    for (extreme, value, text) in cases {
        assert_eq!(
            single(text),
            Remark::TemperatureExtreme(TemperatureExtreme { extreme, period_hours: 6, temperature: celsius(value) }),
            "remark {}",
            text
        );
    }
}

#[test]
fn precipitation_groups() {
    let cases: Vec<(u8, Option<f64>, &str)> = vec![
        (1, Some(0.0), "P0000"),
        (1, Some(0.12), "P0012"),
        (6, Some(1.25), "60125"),
        (24, Some(0.5), "70050"),
        (6, None, "6////"),
        (1, None, "P////"),
    ];
    for (expected_period, inches, text) in cases {
        match single(text) {
            Remark::Precipitation { period, amount } => {
                assert_eq!(period, expected_period, "period of {}", text);
                assert_eq!(amount.unit(), DistanceUnit::Inches);
                match (inches, amount.value()) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "amount of {}", text),
                    (None, None) => {}
                    (a, b) => panic!("amount of {}: expected {:?}, got {:?}", text, a, b),
                }
            }
            other => panic!("{} decoded as {:?}", text, other),
        }
    }
}

#[test]
fn pressure_remarks() {
    match single("52032") {
        Remark::PressureTendency { character, change } => {
            assert_eq!(character, 2);
            assert!((change.value().unwrap() - 3.2).abs() < 1e-9);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(remark("59032").is_none());

    match single("SLP982") {
        Remark::SeaLevelPressure(p) => assert!((p.value().unwrap() - 998.2).abs() < 1e-9),
        other => panic!("unexpected {:?}", other),
    }
    match single("SLP013") {
        Remark::SeaLevelPressure(p) => assert!((p.value().unwrap() - 1001.3).abs() < 1e-9),
        other => panic!("unexpected {:?}", other),
    }
    match single("SLPNO") {
        Remark::SeaLevelPressure(p) => assert!(p.is_unknown()),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn automated_station_types() {
    let cases: Vec<(StationType, &str)> = vec![
        (StationType::WithoutPrecipitationDiscriminator, "AO1"),
        (StationType::WithPrecipitationDiscriminator, "AO2"),
        (StationType::WithoutPrecipitationDiscriminator, "A01"),
        (StationType::WithPrecipitationDiscriminator, "A02"),
    ];
    for (expected, text) in cases {
        assert_eq!(single(text), Remark::AutomatedStationType(expected), "remark {}", text);
    }
    assert!(remark("AO3").is_none());
}

#[test]
fn hourly_temperature() {
    assert_eq!(
        single("T01721011"),
        Remark::HourlyTemperature { temperature: celsius(17.2), dew_point: Some(celsius(-1.1)) }
    );
    assert_eq!(single("T1005"), Remark::HourlyTemperature { temperature: celsius(-0.5), dew_point: None });
}

#[test]
fn sensor_status_indicators() {
    let cases: Vec<(Sensor, &str)> = vec![
        (Sensor::RunwayVisualRange, "RVRNO"),
        (Sensor::PresentWeather, "PWINO"),
        (Sensor::PrecipitationGauge, "PNO"),
        (Sensor::FreezingRain, "FZRANO"),
        (Sensor::Lightning, "TSNO"),
        (Sensor::Visibility(None), "VISNO"),
        (Sensor::Ceiling(None), "CHINO"),
    ];
    for (expected, text) in cases {
        assert_eq!(single(text), Remark::SensorStatus(expected), "remark {}", text);
    }

    assert_eq!(remark("VISNO RWY06"), Some((Remark::SensorStatus(Sensor::Visibility(Some("RWY06".into()))), 2)));
    assert_eq!(remark("CHINO NE"), Some((Remark::SensorStatus(Sensor::Ceiling(Some("NE".into()))), 2)));
}

#[test]
fn color_codes() {
    let cases: Vec<(ColorState, bool, &str)> = vec![
        (ColorState::Blue, false, "BLU"),
        (ColorState::White, false, "WHT"),
        (ColorState::Green, false, "GRN"),
        (ColorState::Yellow, false, "YLO"),
        (ColorState::Yellow1, false, "YLO1"),
        (ColorState::Yellow2, false, "YLO2"),
        (ColorState::Amber, false, "AMB"),
        (ColorState::Red, true, "BLACKRED"),
    ];
    for (state, black, text) in cases {
        assert_eq!(single(text), Remark::ColorCode { state, black }, "remark {}", text);
    }
}

#[test]
fn maintenance_indicator() {
    assert_eq!(single("$"), Remark::MaintenanceNeeded);
}

#[test]
fn lightning_spans_several_chunks() {
    let (decoded, consumed) = remark("FRQ LTGICCG DSNT NW-N AO2").unwrap();
    assert_eq!(consumed, 4);
    assert_eq!(
        decoded,
        Remark::Lightning(Lightning {
            frequency: Some(LightningFrequency::Frequent),
            types: vec![LightningType::InCloud, LightningType::CloudToGround],
            location: Some(LightningLocation::Distant),
            directions: vec![Direction::new(315.0), Direction::new(0.0)],
        })
    );

    let (decoded, consumed) = remark("LTG OHD").unwrap();
    assert_eq!(consumed, 2);
    assert_eq!(
        decoded,
        Remark::Lightning(Lightning {
            frequency: None,
            types: Vec::new(),
            location: Some(LightningLocation::Overhead),
            directions: Vec::new(),
        })
    );
}

#[test]
fn lightning_leaves_invalid_compass_points() {
    // (input, chunks consumed)
    let cases = vec![("OCNL LTGIC OHD NNN", 3), ("LTGCG VC NE-XYZ", 2), ("LTG DSNT SSW-NNE", 3)];

    for (text, expected) in cases {
        let (decoded, consumed) = remark(text).unwrap_or_else(|| panic!("lightning should match: {}", text));
        assert_eq!(consumed, expected, "chunks consumed by {}", text);
        assert!(matches!(decoded, Remark::Lightning(_)), "{} is lightning", text);
    }

    let (decoded, _) = remark("LTG DSNT SSW-NNE").unwrap();
    let Remark::Lightning(lightning) = decoded else { unreachable!() };
    assert_eq!(lightning.directions, vec![Direction::new(202.5), Direction::new(22.5)]);
}

#[test]
fn unknown_remarks_decline() {
    for text in ["SNB15", "PK", "WND", "29012/1755", "FRQ"] {
        assert!(remark(text).is_none(), "remark should decline: {}", text);
    }
}
