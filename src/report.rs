//! Decoded report model.
//!
//! These are the values the rule families produce and the decoder collects
//! into a [`DecodedReport`]. Nothing here parses text; see `rules/` for that.

use crate::units::{Direction, Distance, Pressure, Speed, Temperature};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Metar,
    Speci,
}

/// Who (or what) produced the observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observer {
    #[default]
    Real,
    Auto,
    Corrected,
    Delayed,
}

/// The `ddhhmmZ` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationTime {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ObservationTime {
    /// Resolve the day-of-month group into a full UTC instant.
    ///
    /// Picks the latest matching instant not after `reference` (one day of
    /// clock skew is tolerated, since reports are often fetched right after
    /// midnight UTC). Walks back at most a year of months to find one that
    /// has the requested day.
    pub fn resolve(&self, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;
        let latest = reference + Duration::days(1);
        let (mut year, mut month) = (latest.year(), latest.month());

        for _ in 0..13 {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, self.day) {
                let candidate = NaiveDateTime::new(date, time);
                if candidate <= latest {
                    return Some(candidate);
                }
            }
            if month == 1 {
                year -= 1;
                month = 12;
            } else {
                month -= 1;
            }
        }
        None
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:02} {:02}:{:02}Z", self.day, self.hour, self.minute)
    }
}

// --- Wind ---------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindDirection {
    /// A bearing, possibly unknown (`///`).
    Bearing(Direction),
    /// `VRB`
    Variable,
}

/// Surface wind. `gust` is reported as given: it is not checked against `speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub direction: WindDirection,
    pub speed: Speed,
    pub gust: Option<Speed>,
}

/// `dddVddd` directional variation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableWind {
    pub from: Direction,
    pub to: Direction,
}

// --- Visibility ---------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    MoreThan,
    LessThan,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub distance: Distance,
    pub direction: Option<Direction>,
    comparator: Option<Comparator>,
}

impl Visibility {
    pub fn new(distance: Distance) -> Self {
        Visibility { distance, direction: None, comparator: None }
    }

    /// A bounded visibility. A comparator is only kept when the distance is
    /// concrete; an unknown distance cannot be "more than" anything.
    pub fn bounded(distance: Distance, comparator: Option<Comparator>) -> Self {
        let comparator = if distance.is_unknown() { None } else { comparator };
        Visibility { distance, direction: None, comparator }
    }

    pub fn towards(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn comparator(&self) -> Option<Comparator> {
        self.comparator
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.comparator {
            Some(Comparator::MoreThan) => write!(f, "more than ")?,
            Some(Comparator::LessThan) => write!(f, "less than ")?,
            None => {}
        }
        write!(f, "{}", self.distance)?;
        if let Some(point) = self.direction.and_then(|d| d.compass()) {
            write!(f, " towards {}", point)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tendency {
    NoChange,
    Improving,
    Worsening,
}

/// Runway visual range for one runway.
#[derive(Debug, Clone, PartialEq)]
pub struct RunwayVisibleRange {
    pub runway: String,
    pub visibility: Visibility,
    /// Upper bound when the range varies (`V` groups).
    pub secondary: Option<Visibility>,
    pub tendency: Option<Tendency>,
}

// --- Sky ----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudCover {
    Few,
    Scattered,
    Broken,
    Overcast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudType {
    Cumulonimbus,
    ToweringCumulus,
}

/// One cloud layer, or clear sky when `cover` is `None` and nothing else is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCondition {
    pub cover: Option<CloudCover>,
    pub height: Option<Distance>,
    pub cloud_type: Option<CloudType>,
}

impl SkyCondition {
    pub fn clear() -> Self {
        SkyCondition { cover: None, height: None, cloud_type: None }
    }

    pub fn is_clear(&self) -> bool {
        self.cover.is_none() && self.height.is_none() && self.cloud_type.is_none()
    }
}

// --- Weather phenomena ----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intensity {
    Light,
    #[default]
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    Shallow,
    Partial,
    Patches,
    LowDrifting,
    Blowing,
    Showers,
    Thunderstorm,
    Freezing,
}

impl Descriptor {
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "MI" => Descriptor::Shallow,
            "PR" => Descriptor::Partial,
            "BC" => Descriptor::Patches,
            "DR" => Descriptor::LowDrifting,
            "BL" => Descriptor::Blowing,
            "SH" => Descriptor::Showers,
            "TS" => Descriptor::Thunderstorm,
            "FZ" => Descriptor::Freezing,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Descriptor::Shallow => "shallow",
            Descriptor::Partial => "partial",
            Descriptor::Patches => "patches of",
            Descriptor::LowDrifting => "low drifting",
            Descriptor::Blowing => "blowing",
            Descriptor::Showers => "showers of",
            Descriptor::Thunderstorm => "thunderstorm",
            Descriptor::Freezing => "freezing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phenomenon {
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    UnknownPrecipitation,
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
    NoSignificantWeather,
}

impl Phenomenon {
    /// Look up a two-letter phenomenon code.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "DZ" => Phenomenon::Drizzle,
            "RA" => Phenomenon::Rain,
            "SN" => Phenomenon::Snow,
            "SG" => Phenomenon::SnowGrains,
            "IC" => Phenomenon::IceCrystals,
            "PL" => Phenomenon::IcePellets,
            "GR" => Phenomenon::Hail,
            "GS" => Phenomenon::SmallHail,
            "UP" => Phenomenon::UnknownPrecipitation,
            "BR" => Phenomenon::Mist,
            "FG" => Phenomenon::Fog,
            "FU" => Phenomenon::Smoke,
            "VA" => Phenomenon::VolcanicAsh,
            "DU" => Phenomenon::Dust,
            "SA" => Phenomenon::Sand,
            "HZ" => Phenomenon::Haze,
            "PY" => Phenomenon::Spray,
            "PO" => Phenomenon::DustWhirls,
            "SQ" => Phenomenon::Squalls,
            "FC" => Phenomenon::FunnelCloud,
            "SS" => Phenomenon::Sandstorm,
            "DS" => Phenomenon::Duststorm,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Phenomenon::Drizzle => "drizzle",
            Phenomenon::Rain => "rain",
            Phenomenon::Snow => "snow",
            Phenomenon::SnowGrains => "snow grains",
            Phenomenon::IceCrystals => "ice crystals",
            Phenomenon::IcePellets => "ice pellets",
            Phenomenon::Hail => "hail",
            Phenomenon::SmallHail => "small hail",
            Phenomenon::UnknownPrecipitation => "unknown precipitation",
            Phenomenon::Mist => "mist",
            Phenomenon::Fog => "fog",
            Phenomenon::Smoke => "smoke",
            Phenomenon::VolcanicAsh => "volcanic ash",
            Phenomenon::Dust => "dust",
            Phenomenon::Sand => "sand",
            Phenomenon::Haze => "haze",
            Phenomenon::Spray => "spray",
            Phenomenon::DustWhirls => "dust whirls",
            Phenomenon::Squalls => "squalls",
            Phenomenon::FunnelCloud => "funnel cloud",
            Phenomenon::Sandstorm => "sandstorm",
            Phenomenon::Duststorm => "duststorm",
            Phenomenon::NoSignificantWeather => "no significant weather",
        }
    }
}

/// A present or recent weather group such as `-SN`, `+TSRA` or `RESHRA`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPhenomenon {
    pub intensity: Intensity,
    pub in_vicinity: bool,
    pub descriptor: Option<Descriptor>,
    /// One or two phenomena; two make a compound such as "snow and rain".
    pub phenomena: Vec<Phenomenon>,
    pub recent: bool,
}

impl WeatherPhenomenon {
    pub fn no_significant_weather() -> Self {
        WeatherPhenomenon {
            intensity: Intensity::Moderate,
            in_vicinity: false,
            descriptor: None,
            phenomena: vec![Phenomenon::NoSignificantWeather],
            recent: false,
        }
    }

    /// The compound phenomenon, e.g. `"snow and rain"`.
    pub fn phenomenon(&self) -> String {
        self.phenomena.iter().map(|p| p.name()).collect::<Vec<_>>().join(" and ")
    }
}

impl fmt::Display for WeatherPhenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        if self.recent {
            parts.push("recent");
        }
        match self.intensity {
            Intensity::Light => parts.push("light"),
            Intensity::Heavy => parts.push("heavy"),
            Intensity::Moderate => {}
        }
        if let Some(descriptor) = self.descriptor {
            parts.push(descriptor.name());
        }
        let phenomenon = self.phenomenon();
        if !phenomenon.is_empty() {
            parts.push(&phenomenon);
        }
        if self.in_vicinity {
            parts.push("in the vicinity");
        }
        write!(f, "{}", parts.join(" "))
    }
}

// --- Supplementary body groups ------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindShear {
    Runway(String),
    AllRunways,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trend {
    NoSignificantChange,
    Becoming(Vec<String>),
    Temporary(Vec<String>),
}

// --- Remarks ----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Maximum,
    Minimum,
}

/// A maximum or minimum temperature over `period_hours`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureExtreme {
    pub extreme: Extreme,
    pub period_hours: u8,
    pub temperature: Temperature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationType {
    /// `AO1`
    WithoutPrecipitationDiscriminator,
    /// `AO2`
    WithPrecipitationDiscriminator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sensor {
    RunwayVisualRange,
    PresentWeather,
    PrecipitationGauge,
    FreezingRain,
    Lightning,
    Visibility(Option<String>),
    Ceiling(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorState {
    Blue,
    White,
    Green,
    Yellow,
    Yellow1,
    Yellow2,
    Amber,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningFrequency {
    Occasional,
    Frequent,
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningType {
    InCloud,
    CloudToCloud,
    CloudToGround,
    CloudToAir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightningLocation {
    Overhead,
    Vicinity,
    Distant,
    AllQuadrants,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lightning {
    pub frequency: Option<LightningFrequency>,
    pub types: Vec<LightningType>,
    pub location: Option<LightningLocation>,
    pub directions: Vec<Direction>,
}

/// One decoded remark. Anything the remark rules do not recognise is kept
/// verbatim as [`Remark::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Remark {
    TemperatureExtreme(TemperatureExtreme),
    MinMax24h { maximum: TemperatureExtreme, minimum: TemperatureExtreme },
    /// `5appp`: WMO tendency character (0..=8) and the 3-hour change.
    PressureTendency { character: u8, change: Pressure },
    Precipitation { period: u8, amount: Distance },
    AutomatedStationType(StationType),
    SeaLevelPressure(Pressure),
    HourlyTemperature { temperature: Temperature, dew_point: Option<Temperature> },
    SensorStatus(Sensor),
    ColorCode { state: ColorState, black: bool },
    MaintenanceNeeded,
    Lightning(Lightning),
    Raw(String),
}

// --- Report -------------------------------------------------------------------------

/// A fully decoded report.
///
/// Built by a single decoder pass and never mutated afterwards. Optional
/// fields are `None` when the group was absent; an explicitly unreported
/// value (`////`) is present with an unknown reading instead.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedReport {
    pub kind: Option<ReportKind>,
    pub station: String,
    pub time: ObservationTime,
    /// Full timestamp, when a reference time was supplied.
    pub observed_at: Option<NaiveDateTime>,
    pub nil: bool,
    pub observer: Observer,
    pub wind: Option<Wind>,
    pub variable_wind: Option<VariableWind>,
    pub cavok: bool,
    pub visibility: Option<Visibility>,
    pub minimum_visibility: Option<Visibility>,
    pub runway_visibility: Vec<RunwayVisibleRange>,
    pub present_weather: Vec<WeatherPhenomenon>,
    pub sky: Vec<SkyCondition>,
    pub vertical_visibility: Option<Distance>,
    pub temperature: Option<Temperature>,
    pub dew_point: Option<Temperature>,
    pub sea_level_pressure: Option<Pressure>,
    pub recent_weather: Vec<WeatherPhenomenon>,
    pub wind_shear: Vec<WindShear>,
    pub density_altitude: Option<Distance>,
    pub trend: Option<Trend>,
    pub remarks: Vec<Remark>,
    /// Chunks no grammar state accepted (loose mode only).
    pub unparsed: Vec<String>,
}

impl DecodedReport {
    pub(crate) fn new(station: String, time: ObservationTime) -> Self {
        DecodedReport {
            kind: None,
            station,
            time,
            observed_at: None,
            nil: false,
            observer: Observer::Real,
            wind: None,
            variable_wind: None,
            cavok: false,
            visibility: None,
            minimum_visibility: None,
            runway_visibility: Vec::new(),
            present_weather: Vec::new(),
            sky: Vec::new(),
            vertical_visibility: None,
            temperature: None,
            dew_point: None,
            sea_level_pressure: None,
            recent_weather: Vec::new(),
            wind_shear: Vec::new(),
            density_altitude: None,
            trend: None,
            remarks: Vec::new(),
            unparsed: Vec::new(),
        }
    }
}
