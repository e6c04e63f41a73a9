//! Field recognizers for the report body.
//!
//! One ordered table per field. Tables are built once and shared by every
//! decode; each `rules_*.rs` file owns one family.

use once_cell::sync::Lazy;

use crate::Rule;
use crate::report::{
    ObservationTime, Observer, ReportKind, RunwayVisibleRange, SkyCondition, VariableWind, Visibility,
    WeatherPhenomenon, Wind, WindShear,
};
use crate::units::{Distance, Pressure, Temperature};

mod helpers;
mod rules_header;
mod rules_pressure;
mod rules_runway;
mod rules_sky;
mod rules_supplementary;
mod rules_temperature;
mod rules_visibility;
mod rules_weather;
mod rules_wind;

#[cfg(test)]
mod tests;

pub(crate) use rules_supplementary::TrendKind;

pub(crate) static REPORT_KIND: Lazy<Vec<Rule<ReportKind>>> = Lazy::new(rules_header::report_kind_rules);
pub(crate) static STATION: Lazy<Vec<Rule<String>>> = Lazy::new(rules_header::station_rules);
pub(crate) static DATETIME: Lazy<Vec<Rule<ObservationTime>>> = Lazy::new(rules_header::datetime_rules);
pub(crate) static NIL: Lazy<Vec<Rule<()>>> = Lazy::new(rules_header::nil_rules);
pub(crate) static OBSERVER: Lazy<Vec<Rule<Observer>>> = Lazy::new(rules_header::observer_rules);

pub(crate) static WIND: Lazy<Vec<Rule<Wind>>> = Lazy::new(rules_wind::wind_rules);
pub(crate) static VARIABLE_WIND: Lazy<Vec<Rule<VariableWind>>> = Lazy::new(rules_wind::variable_wind_rules);
pub(crate) static CAVOK: Lazy<Vec<Rule<()>>> = Lazy::new(rules_supplementary::cavok_rules);

// Prevailing and minimum visibility share one table.
pub(crate) static VISIBILITY: Lazy<Vec<Rule<Visibility>>> = Lazy::new(rules_visibility::visibility_rules);
pub(crate) static RUNWAY: Lazy<Vec<Rule<RunwayVisibleRange>>> = Lazy::new(rules_runway::runway_rules);

// Present and recent weather share one table.
pub(crate) static WEATHER: Lazy<Vec<Rule<WeatherPhenomenon>>> = Lazy::new(rules_weather::weather_rules);
pub(crate) static SKY: Lazy<Vec<Rule<SkyCondition>>> = Lazy::new(rules_sky::sky_rules);
pub(crate) static VERTICAL_VISIBILITY: Lazy<Vec<Rule<Distance>>> = Lazy::new(rules_sky::vertical_visibility_rules);

pub(crate) static TEMPERATURE: Lazy<Vec<Rule<(Temperature, Temperature)>>> =
    Lazy::new(rules_temperature::temperature_rules);
pub(crate) static PRESSURE: Lazy<Vec<Rule<Pressure>>> = Lazy::new(rules_pressure::pressure_rules);

pub(crate) static WIND_SHEAR: Lazy<Vec<Rule<WindShear>>> = Lazy::new(rules_supplementary::wind_shear_rules);
pub(crate) static DENSITY_ALTITUDE: Lazy<Vec<Rule<Distance>>> =
    Lazy::new(rules_supplementary::density_altitude_rules);
pub(crate) static TREND: Lazy<Vec<Rule<TrendKind>>> = Lazy::new(rules_supplementary::trend_rules);
