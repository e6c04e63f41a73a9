use super::*;
use crate::engine::{Hit, first_match, scan_chunks};
use crate::report::{CloudCover, CloudType, Comparator, Descriptor, Intensity, Phenomenon, Tendency, WindDirection};
use crate::units::{DistanceUnit, METERS_PER_MILE, PressureUnit, Reading, SpeedUnit};

fn hit<T>(rules: &[Rule<T>], text: &str) -> Option<Hit<T>> {
    first_match(rules, &scan_chunks(text))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn station_examples_matching() {
    for text in ["PAIL", "EGLL", "K1A2", "Y2K3"] {
        let h = hit(&STATION, text).unwrap_or_else(|| panic!("station should match: {}", text));
        assert_eq!(h.value, text);
    }
    for text in ["1ABC", "EGL", "EGLLX", "egll"] {
        assert!(hit(&STATION, text).is_none(), "station should decline: {}", text);
    }
}

#[test]
fn datetime_round_trip() {
    for day in 1..=31u32 {
        for (hour, minute) in [(0u32, 0u32), (12, 30), (23, 59)] {
            let text = format!("{:02}{:02}{:02}Z", day, hour, minute);
            let h = hit(&DATETIME, &text).unwrap_or_else(|| panic!("datetime should match: {}", text));
            assert_eq!((h.value.day, h.value.hour, h.value.minute), (day, hour, minute));
        }
    }
    for text in ["001610Z", "322400Z", "061660Z", "061610", "6161Z"] {
        assert!(hit(&DATETIME, text).is_none(), "datetime should decline: {}", text);
    }
}

#[test]
fn observer_examples_matching() {
    let cases: Vec<(Observer, &str)> = vec![
        (Observer::Auto, "AUTO"),
        (Observer::Corrected, "COR"),
        (Observer::Corrected, "CCA"),
        (Observer::Corrected, "CCZ"),
        (Observer::Delayed, "RTD"),
    ];
    for (expected, text) in cases {
        assert_eq!(hit(&OBSERVER, text).map(|h| h.value), Some(expected), "observer: {}", text);
    }
    assert!(hit(&OBSERVER, "CC1").is_none());
}

#[test]
fn wind_examples_matching() {
    // (input, degrees (None = unknown), speed (None = unknown), gust, unit)
    let cases: Vec<(&str, Option<f64>, Option<f64>, Option<f64>, SpeedUnit)> = vec![
        ("24006KT", Some(240.0), Some(6.0), None, SpeedUnit::Knots),
        ("24015G25KT", Some(240.0), Some(15.0), Some(25.0), SpeedUnit::Knots),
        ("09005MPS", Some(90.0), Some(5.0), None, SpeedUnit::MetersPerSecond),
        ("18010KMH", Some(180.0), Some(10.0), None, SpeedUnit::KilometersPerHour),
        ("18010", Some(180.0), Some(10.0), None, SpeedUnit::KilometersPerHour),
        ("00000KT", Some(0.0), Some(0.0), None, SpeedUnit::Knots),
        ("360105G130KT", Some(0.0), Some(105.0), Some(130.0), SpeedUnit::Knots),
        ("///05KT", None, Some(5.0), None, SpeedUnit::Knots),
        ("////10KT", None, Some(10.0), None, SpeedUnit::Knots),
        ("/////KT", None, None, None, SpeedUnit::Knots),
    ];

    for (text, degrees, speed, gust, unit) in cases {
        let wind = hit(&WIND, text).unwrap_or_else(|| panic!("wind should match: {}", text)).value;
        match wind.direction {
            WindDirection::Bearing(d) => assert_eq!(d.degrees(), degrees, "direction of {}", text),
            WindDirection::Variable => panic!("{} is not variable", text),
        }
        assert_eq!(wind.speed.value(), speed, "speed of {}", text);
        assert_eq!(wind.speed.unit(), unit, "unit of {}", text);
        assert_eq!(wind.gust.and_then(|g| g.value()), gust, "gust of {}", text);
    }
}

#[test]
fn variable_wind_direction() {
    let wind = hit(&WIND, "VRB03G12KT").unwrap().value;
    assert_eq!(wind.direction, WindDirection::Variable);
    assert_eq!(wind.speed.value(), Some(3.0));
    assert_eq!(wind.gust.and_then(|g| g.value()), Some(12.0));
}

#[test]
fn wind_direction_above_360_declines() {
    assert!(hit(&WIND, "37010KT").is_none());
    assert!(hit(&WIND, "99999KT").is_none());
}

#[test]
fn wind_directions_normalize() {
    for degrees in 0..=360u32 {
        let text = format!("{:03}10KT", degrees);
        let wind = hit(&WIND, &text).unwrap().value;
        let expected = if degrees == 360 { 0.0 } else { degrees as f64 };
        assert_eq!(wind.direction, WindDirection::Bearing(crate::units::Direction::new(expected)));

        let text = format!("{:03}V{:03}", degrees, 360 - degrees);
        let variation = hit(&VARIABLE_WIND, &text).unwrap().value;
        assert_eq!(variation.from.degrees(), Some(expected), "{}", text);
    }
    let variation = hit(&VARIABLE_WIND, "200V360").unwrap().value;
    assert_eq!(variation.to.degrees(), Some(0.0));
}

#[test]
fn visibility_examples_matching() {
    // (input, meters, comparator, chunks consumed)
    let cases: Vec<(&str, f64, Option<Comparator>, usize)> = vec![
        ("9999", 10_000.0, Some(Comparator::MoreThan), 1),
        ("4000NDV", 4000.0, None, 1),
        ("1 3/4SM", 1.75 * METERS_PER_MILE, None, 2),
        ("2 1/2SM", 2.5 * METERS_PER_MILE, None, 2),
        ("1/2SM", 0.5 * METERS_PER_MILE, None, 1),
        ("M1/4SM", 0.25 * METERS_PER_MILE, Some(Comparator::LessThan), 1),
        ("10SM", 10.0 * METERS_PER_MILE, None, 1),
        ("P6SM", 6.0 * METERS_PER_MILE, Some(Comparator::MoreThan), 1),
        ("15KM", 15_000.0, None, 1),
        ("0800", 800.0, None, 1),
        ("1500SW", 1500.0, None, 1),
    ];

    for (text, meters, comparator, consumed) in cases {
        let h = hit(&VISIBILITY, text).unwrap_or_else(|| panic!("visibility should match: {}", text));
        let got = h.value.distance.to(DistanceUnit::Meters).value().unwrap();
        assert!(close(got, meters), "{}: expected {} m, got {} m", text, meters, got);
        assert_eq!(h.value.comparator(), comparator, "comparator of {}", text);
        assert_eq!(h.consumed, consumed, "consumed by {}", text);
    }
}

#[test]
fn fractional_miles_sum_whole_and_fraction() {
    for whole in 0..=9u32 {
        for (num, den) in [(1u32, 2u32), (1, 4), (3, 4), (5, 8), (1, 16)] {
            let text = format!("{} {}/{}SM", whole, num, den);
            let v = hit(&VISIBILITY, &text).unwrap().value;
            let miles = whole as f64 + num as f64 / den as f64;
            assert!(close(v.distance.to(DistanceUnit::StatuteMiles).value().unwrap(), miles), "{}", text);
            assert!(close(v.distance.to(DistanceUnit::Meters).value().unwrap(), miles * METERS_PER_MILE), "{}", text);
        }
    }
}

#[test]
fn visibility_towards_compass_point() {
    let v = hit(&VISIBILITY, "1500SW").unwrap().value;
    assert_eq!(v.direction.and_then(|d| d.degrees()), Some(225.0));
    assert!(hit(&VISIBILITY, "1500XY").is_none());
    assert!(hit(&VISIBILITY, "1/0SM").is_none());
    assert!(hit(&VISIBILITY, "////").is_none());
}

#[test]
fn runway_visual_range_with_variation() {
    let rvr = hit(&RUNWAY, "R26/0750V1200U").unwrap().value;
    assert_eq!(rvr.runway, "26");
    assert_eq!(rvr.visibility.distance.value(), Some(750.0));
    assert_eq!(rvr.visibility.distance.unit(), DistanceUnit::Meters);
    assert_eq!(rvr.secondary.map(|v| v.distance.value()), Some(Some(1200.0)));
    assert_eq!(rvr.tendency, Some(Tendency::Improving));
}

#[test]
fn runway_visual_range_examples() {
    let rvr = hit(&RUNWAY, "R08L/P1500N").unwrap().value;
    assert_eq!(rvr.runway, "08L");
    assert_eq!(rvr.visibility.comparator(), Some(Comparator::MoreThan));
    assert_eq!(rvr.tendency, Some(Tendency::NoChange));
    assert!(rvr.secondary.is_none());

    let rvr = hit(&RUNWAY, "R27R/M0050/D").unwrap().value;
    assert_eq!(rvr.visibility.comparator(), Some(Comparator::LessThan));
    assert_eq!(rvr.tendency, Some(Tendency::Worsening));

    // FT on the upper bound applies to both.
    let rvr = hit(&RUNWAY, "R10/1000V2400FT").unwrap().value;
    assert_eq!(rvr.visibility.distance.unit(), DistanceUnit::Feet);
    assert_eq!(rvr.secondary.map(|v| v.distance.unit()), Some(DistanceUnit::Feet));
    assert_eq!(rvr.tendency, None);

    assert!(hit(&RUNWAY, "R26/075").is_none());
}

#[test]
fn weather_examples_matching() {
    // (input, intensity, vicinity, descriptor, phenomenon)
    let cases: Vec<(&str, Intensity, bool, Option<Descriptor>, &str)> = vec![
        ("-SN", Intensity::Light, false, None, "snow"),
        ("+TSRA", Intensity::Heavy, false, Some(Descriptor::Thunderstorm), "rain"),
        ("SNRA", Intensity::Moderate, false, None, "snow and rain"),
        ("RADZ", Intensity::Moderate, false, None, "rain and drizzle"),
        ("VCSH", Intensity::Moderate, true, Some(Descriptor::Showers), ""),
        ("-VCSHRA", Intensity::Light, true, Some(Descriptor::Showers), "rain"),
        ("FZFG", Intensity::Moderate, false, Some(Descriptor::Freezing), "fog"),
        ("BR", Intensity::Moderate, false, None, "mist"),
        ("TS", Intensity::Moderate, false, Some(Descriptor::Thunderstorm), ""),
    ];

    for (text, intensity, vicinity, descriptor, phenomenon) in cases {
        let w = hit(&WEATHER, text).unwrap_or_else(|| panic!("weather should match: {}", text)).value;
        assert_eq!(w.intensity, intensity, "intensity of {}", text);
        assert_eq!(w.in_vicinity, vicinity, "vicinity of {}", text);
        assert_eq!(w.descriptor, descriptor, "descriptor of {}", text);
        assert_eq!(w.phenomenon(), phenomenon, "phenomenon of {}", text);
        assert!(!w.recent);
    }

    let nsw = hit(&WEATHER, "NSW").unwrap().value;
    assert_eq!(nsw.phenomena, vec![Phenomenon::NoSignificantWeather]);

    for text in ["-", "VC", "SNRADZ", "XX", "//", "RMK"] {
        assert!(hit(&WEATHER, text).is_none(), "weather should decline: {}", text);
    }
}

#[test]
fn sky_examples_matching() {
    // (input, cover, height in meters (None = absent, Some(None) = unknown), cloud type)
    let cases: Vec<(&str, Option<CloudCover>, Option<Option<f64>>, Option<CloudType>)> = vec![
        ("NSC", None, None, None),
        ("CLR", None, None, None),
        ("SKC", None, None, None),
        ("NCD", None, None, None),
        ("BKN016", Some(CloudCover::Broken), Some(Some(487.68)), None),
        ("OVC030", Some(CloudCover::Overcast), Some(Some(914.4)), None),
        ("FEW020CB", Some(CloudCover::Few), Some(Some(609.6)), Some(CloudType::Cumulonimbus)),
        ("SCT040TCU", Some(CloudCover::Scattered), Some(Some(1219.2)), Some(CloudType::ToweringCumulus)),
        ("BKN///", Some(CloudCover::Broken), Some(None), None),
        ("OVC010///", Some(CloudCover::Overcast), Some(Some(304.8)), None),
        ("CB", None, None, Some(CloudType::Cumulonimbus)),
        ("TCU", None, None, Some(CloudType::ToweringCumulus)),
    ];

    for (text, cover, height, cloud_type) in cases {
        let sky = hit(&SKY, text).unwrap_or_else(|| panic!("sky should match: {}", text)).value;
        assert_eq!(sky.cover, cover, "cover of {}", text);
        assert_eq!(sky.cloud_type, cloud_type, "cloud type of {}", text);
        match (height, sky.height) {
            (None, None) => {}
            (Some(None), Some(h)) => assert!(h.is_unknown(), "height of {} should be unknown", text),
            (Some(Some(m)), Some(h)) => assert!(close(h.value().unwrap(), m), "height of {}", text),
            (expected, got) => panic!("height of {}: expected {:?}, got {:?}", text, expected, got),
        }
    }
    assert!(hit(&SKY, "BKN16").is_none());
}

#[test]
fn vertical_visibility_examples() {
    assert!(close(hit(&VERTICAL_VISIBILITY, "VV002").unwrap().value.value().unwrap(), 60.96));
    assert_eq!(hit(&VERTICAL_VISIBILITY, "VV///").unwrap().value.reading(), Reading::Unknown);
    assert!(hit(&VERTICAL_VISIBILITY, "VV02").is_none());
}

#[test]
fn temperature_examples_matching() {
    // (input, temperature, dew point), None = unknown
    let cases: Vec<(&str, Option<f64>, Option<f64>)> = vec![
        ("M17/M20", Some(-17.0), Some(-20.0)),
        ("15/08", Some(15.0), Some(8.0)),
        ("02/M01", Some(2.0), Some(-1.0)),
        ("M00/M00", Some(0.0), Some(0.0)),
        ("XX/05", None, Some(5.0)),
        ("12///", Some(12.0), None),
        ("12/", Some(12.0), None),
        ("/////", None, None),
    ];

    for (text, temperature, dew_point) in cases {
        let (t, d) = hit(&TEMPERATURE, text).unwrap_or_else(|| panic!("temperature should match: {}", text)).value;
        assert_eq!(t.value(), temperature, "temperature of {}", text);
        assert_eq!(d.value(), dew_point, "dew point of {}", text);
    }
    assert!(hit(&TEMPERATURE, "1/2SM").is_none());
}

#[test]
fn pressure_examples_matching() {
    let p = hit(&PRESSURE, "A2910").unwrap().value;
    assert_eq!(p.unit(), PressureUnit::InchesOfMercury);
    assert!(close(p.value().unwrap(), 29.10));

    let p = hit(&PRESSURE, "Q1013").unwrap().value;
    assert_eq!(p.unit(), PressureUnit::Hectopascals);
    assert_eq!(p.value(), Some(1013.0));

    assert!(hit(&PRESSURE, "Q////").unwrap().value.is_unknown());
    assert!(hit(&PRESSURE, "Q101").is_none());
}

#[test]
fn supplementary_groups() {
    let h = hit(&WIND_SHEAR, "WS R26L").unwrap();
    assert_eq!(h.value, WindShear::Runway("26L".into()));
    assert_eq!(h.consumed, 2);
    assert_eq!(hit(&WIND_SHEAR, "WS RWY09").unwrap().value, WindShear::Runway("09".into()));
    let h = hit(&WIND_SHEAR, "WS ALL RWY").unwrap();
    assert_eq!((h.value, h.consumed), (WindShear::AllRunways, 3));

    let h = hit(&DENSITY_ALTITUDE, "DENSITY ALT 4200FT").unwrap();
    assert_eq!(h.value.value(), Some(4200.0));
    assert_eq!(h.value.unit(), DistanceUnit::Feet);
    assert_eq!(h.consumed, 3);

    assert_eq!(hit(&TREND, "NOSIG").unwrap().value, TrendKind::NoSignificantChange);
    assert_eq!(hit(&TREND, "TEMPO").unwrap().value, TrendKind::Temporary);
    assert_eq!(hit(&TREND, "BECMG").unwrap().value, TrendKind::Becoming);
    assert!(hit(&CAVOK, "CAVOK").is_some());
    assert!(hit(&NIL, "NIL").is_some());
    assert_eq!(hit(&REPORT_KIND, "SPECI").unwrap().value, ReportKind::Speci);
}
