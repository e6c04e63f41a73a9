//! Typed measurement values.
//!
//! Every quantity decoded from a report is a [`Measure`]: a [`Reading`] tagged
//! with the unit it was reported in. A reading is either a concrete magnitude
//! or explicitly [`Reading::Unknown`], which is how reports spell "sensor
//! unavailable" (`////`). That is a different thing from a field that is simply
//! absent, which the report model expresses with `Option`.
//!
//! Conversions never invent data: converting an unknown reading yields an
//! unknown reading.
//!
//! ```text
//! Measure<DistanceUnit>    Distance     m ⇄ km ⇄ statute miles ⇄ ft ⇄ in
//! Measure<SpeedUnit>       Speed        km/h ⇄ kt ⇄ m/s
//! Measure<TemperatureUnit> Temperature  °C ⇄ °F ⇄ K
//! Measure<PressureUnit>    Pressure     hPa ⇄ inHg
//! Direction                             degrees, normalized into [0, 360)
//! ```

use std::fmt;

pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_INCH: f64 = 0.0254;
pub const KMH_PER_KNOT: f64 = 1.852;
pub const KMH_PER_MPS: f64 = 3.6;
pub const HPA_PER_INHG: f64 = 33.863_886_666_718_3;

/// A magnitude that may be explicitly unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Known(f64),
    Unknown,
}

impl Reading {
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Known(v) => Some(v),
            Reading::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Reading::Unknown)
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Reading {
        match self {
            Reading::Known(v) => Reading::Known(f(v)),
            Reading::Unknown => Reading::Unknown,
        }
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Reading::Unknown, Reading::Known)
    }
}

/// A unit of one physical dimension.
///
/// Each dimension picks a base unit; `to_base`/`from_base` convert a magnitude
/// into and out of it. Affine conversions (temperature) fit the same shape.
pub trait Unit: Copy + PartialEq + fmt::Debug {
    fn to_base(self, value: f64) -> f64;
    fn from_base(self, value: f64) -> f64;
    fn symbol(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    StatuteMiles,
    Feet,
    Inches,
}

impl Unit for DistanceUnit {
    fn to_base(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Kilometers => value * 1000.0,
            DistanceUnit::StatuteMiles => value * METERS_PER_MILE,
            DistanceUnit::Feet => value * METERS_PER_FOOT,
            DistanceUnit::Inches => value * METERS_PER_INCH,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Kilometers => value / 1000.0,
            DistanceUnit::StatuteMiles => value / METERS_PER_MILE,
            DistanceUnit::Feet => value / METERS_PER_FOOT,
            DistanceUnit::Inches => value / METERS_PER_INCH,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::StatuteMiles => "mi",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Inches => "in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedUnit {
    KilometersPerHour,
    Knots,
    MetersPerSecond,
}

impl Unit for SpeedUnit {
    fn to_base(self, value: f64) -> f64 {
        match self {
            SpeedUnit::KilometersPerHour => value,
            SpeedUnit::Knots => value * KMH_PER_KNOT,
            SpeedUnit::MetersPerSecond => value * KMH_PER_MPS,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            SpeedUnit::KilometersPerHour => value,
            SpeedUnit::Knots => value / KMH_PER_KNOT,
            SpeedUnit::MetersPerSecond => value / KMH_PER_MPS,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::Knots => "kt",
            SpeedUnit::MetersPerSecond => "m/s",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit for TemperatureUnit {
    fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => value + 273.15,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressureUnit {
    Hectopascals,
    InchesOfMercury,
}

impl Unit for PressureUnit {
    fn to_base(self, value: f64) -> f64 {
        match self {
            PressureUnit::Hectopascals => value,
            PressureUnit::InchesOfMercury => value * HPA_PER_INHG,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            PressureUnit::Hectopascals => value,
            PressureUnit::InchesOfMercury => value / HPA_PER_INHG,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Hectopascals => "hPa",
            PressureUnit::InchesOfMercury => "inHg",
        }
    }
}

/// A reading in a native unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure<U: Unit> {
    reading: Reading,
    unit: U,
}

pub type Distance = Measure<DistanceUnit>;
pub type Speed = Measure<SpeedUnit>;
pub type Temperature = Measure<TemperatureUnit>;
pub type Pressure = Measure<PressureUnit>;

impl<U: Unit> Measure<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Measure { reading: Reading::Known(value), unit }
    }

    pub fn unknown(unit: U) -> Self {
        Measure { reading: Reading::Unknown, unit }
    }

    pub fn from_reading(reading: Reading, unit: U) -> Self {
        Measure { reading, unit }
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    /// Magnitude in the native unit, `None` when unknown.
    pub fn value(&self) -> Option<f64> {
        self.reading.value()
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn is_unknown(&self) -> bool {
        self.reading.is_unknown()
    }

    /// Magnitude expressed in `unit`.
    pub fn to(&self, unit: U) -> Reading {
        if unit == self.unit {
            return self.reading;
        }
        let native = self.unit;
        self.reading.map(|v| unit.from_base(native.to_base(v)))
    }

    /// The same quantity re-expressed in `unit`.
    pub fn converted(&self, unit: U) -> Self {
        Measure { reading: self.to(unit), unit }
    }
}

impl<U: Unit> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reading {
            Reading::Known(v) => write!(f, "{} {}", format_magnitude(v), self.unit.symbol()),
            Reading::Unknown => write!(f, "unknown"),
        }
    }
}

fn format_magnitude(v: f64) -> String {
    if v.fract() == 0.0 { format!("{}", v as i64) } else { format!("{:.2}", v) }
}

/// 16-point compass rose, clockwise from north.
const COMPASS_POINTS: [&str; 16] =
    ["N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW"];

/// An angle in degrees, always normalized into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    degrees: Reading,
}

impl Direction {
    pub fn new(degrees: f64) -> Self {
        Direction { degrees: Reading::Known(degrees.rem_euclid(360.0)) }
    }

    pub fn unknown() -> Self {
        Direction { degrees: Reading::Unknown }
    }

    /// Parse a 16-point compass abbreviation such as `"NW"` or `"ENE"`.
    pub fn from_compass(point: &str) -> Option<Self> {
        let idx = COMPASS_POINTS.iter().position(|p| *p == point)?;
        Some(Direction::new(idx as f64 * 22.5))
    }

    pub fn degrees(&self) -> Option<f64> {
        self.degrees.value()
    }

    pub fn is_unknown(&self) -> bool {
        self.degrees.is_unknown()
    }

    /// Nearest 16-point compass abbreviation.
    pub fn compass(&self) -> Option<&'static str> {
        let deg = self.degrees.value()?;
        let idx = ((deg / 22.5).round() as usize) % COMPASS_POINTS.len();
        Some(COMPASS_POINTS[idx])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.degrees.value(), self.compass()) {
            (Some(deg), Some(point)) => write!(f, "{}° ({})", format_magnitude(deg), point),
            _ => write!(f, "unknown"),
        }
    }
}
