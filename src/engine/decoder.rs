//! Report decoder: the grammar state machine.
//!
//! The decoder walks the chunk sequence once, left to right, with an index
//! cursor into an immutable chunk vector. The header is fixed:
//!
//! ```text
//! [METAR|SPECI] location datetime [NIL]
//! ```
//!
//! and missing location/datetime is fatal. The body is an ordered list of
//! optional states (`BODY`). At each chunk the decoder tries the states from
//! the current one onwards; the first state that accepts consumes its chunks
//! and becomes the new position in the grammar (or stays current, for the
//! repeating states). `RMK` ends the body; every later chunk goes through the
//! remark table.
//!
//! ```text
//! state_idx ──▶ Observer Wind VariableWind CAVOK Visibility ... Trend
//!                  │
//!   chunk ──▶ try BODY[state_idx..] in order
//!                  ├─ hit:  pos += consumed, state_idx = next(state)
//!                  └─ miss: chunks up to RMK are left over
//!                           strict → ParseError::Unparsable
//!                           loose  → report.unparsed, go to remarks
//! ```

use super::metrics::{RunMetrics, RunResult, Step};
use super::resolve::{observed_at, resolve_remark};
use super::rule_table::{ChunkShape, first_match};
use super::tokenizer::{Chunk, scan_chunks};
use crate::Rule;
use crate::api::{Compliance, Context, Options};
use crate::error::{ParseError, Result};
use crate::report::{
    Comparator, DecodedReport, Observer, Remark, SkyCondition, Trend, Visibility, WeatherPhenomenon,
};
use crate::rules::fields::{self, TrendKind};
use crate::rules::remarks::REMARKS;
use crate::units::{Distance, DistanceUnit};
use std::time::Instant;
use tracing::{debug, trace};

const REMARKS_MARKER: &str = "RMK";
const AUTO_PLACEHOLDER: &str = "auto placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Observer,
    Wind,
    VariableWind,
    Cavok,
    Visibility,
    MinimumVisibility,
    RunwayVisualRange,
    PresentWeather,
    SkyCondition,
    VerticalVisibility,
    TemperatureDewPoint,
    SeaLevelPressure,
    RecentWeather,
    WindShear,
    DensityAltitude,
    Trend,
}

const BODY: [State; 16] = [
    State::Observer,
    State::Wind,
    State::VariableWind,
    State::Cavok,
    State::Visibility,
    State::MinimumVisibility,
    State::RunwayVisualRange,
    State::PresentWeather,
    State::SkyCondition,
    State::VerticalVisibility,
    State::TemperatureDewPoint,
    State::SeaLevelPressure,
    State::RecentWeather,
    State::WindShear,
    State::DensityAltitude,
    State::Trend,
];

impl State {
    fn name(self) -> &'static str {
        match self {
            State::Observer => "observer",
            State::Wind => "wind",
            State::VariableWind => "variable wind",
            State::Cavok => "CAVOK",
            State::Visibility => "visibility",
            State::MinimumVisibility => "minimum visibility",
            State::RunwayVisualRange => "runway visual range",
            State::PresentWeather => "present weather",
            State::SkyCondition => "sky condition",
            State::VerticalVisibility => "vertical visibility",
            State::TemperatureDewPoint => "temperature/dew point",
            State::SeaLevelPressure => "sea level pressure",
            State::RecentWeather => "recent weather",
            State::WindShear => "wind shear",
            State::DensityAltitude => "density altitude",
            State::Trend => "trend",
        }
    }

    fn repeats(self) -> bool {
        matches!(
            self,
            State::RunwayVisualRange
                | State::PresentWeather
                | State::SkyCondition
                | State::RecentWeather
                | State::WindShear
        )
    }

    /// Index of the state to try first after this one (at `idx`) accepted.
    fn next(self, idx: usize) -> usize {
        if self == State::Cavok {
            // CAVOK stands in for visibility through sky condition.
            BODY.iter().position(|s| *s == State::VerticalVisibility).unwrap_or(idx + 1)
        } else if self.repeats() {
            idx
        } else {
            idx + 1
        }
    }

    /// `////`, `//` and `///` mark a group an automatic station did not measure.
    fn is_auto_placeholder(self, text: &str) -> bool {
        match self {
            State::Visibility => text == "////",
            State::PresentWeather => text == "//",
            State::SkyCondition => text == "///" || text == "//////",
            _ => false,
        }
    }
}

/// Decoder over one report.
///
/// Usage: `Decoder::new(raw).run(&context, &options)`.
#[derive(Debug)]
pub struct Decoder<'a> {
    chunks: Vec<Chunk<'a>>,
    /// Index of the next unconsumed chunk.
    pos: usize,
    /// Step trace, only collected by `run_with_metrics`.
    steps: Option<Vec<Step>>,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str) -> Self {
        Decoder { chunks: scan_chunks(input), pos: 0, steps: None }
    }

    pub fn run(mut self, context: &Context, options: &Options) -> Result<DecodedReport> {
        self.decode(context, options)
    }

    pub fn run_with_metrics(mut self, context: &Context, options: &Options) -> Result<RunResult> {
        let total_start = Instant::now();
        self.steps = Some(Vec::new());
        let chunks = self.chunks.len();

        let report = self.decode(context, options)?;

        Ok(RunResult {
            report,
            steps: self.steps.take().unwrap_or_default(),
            metrics: RunMetrics { total: total_start.elapsed(), chunks },
        })
    }

    fn decode(&mut self, context: &Context, options: &Options) -> Result<DecodedReport> {
        debug!(chunks = self.chunks.len(), compliance = ?options.compliance, "decoding report");

        let mut report = self.header(context)?;
        self.body(&mut report, options.compliance)?;
        self.remarks(&mut report);

        Ok(report)
    }

    fn current(&self) -> Option<&'a str> {
        self.chunks.get(self.pos).map(|c| c.text)
    }

    fn rest(&self) -> &[Chunk<'a>] {
        &self.chunks[self.pos.min(self.chunks.len())..]
    }

    /// Advance past `count` chunks, recording them under `state`/`rule`.
    fn consume(&mut self, state: &'static str, rule: &'static str, count: usize) {
        let end = (self.pos + count).min(self.chunks.len());
        trace!(state, rule, chunks = ?self.chunks[self.pos..end].iter().map(|c| c.text).collect::<Vec<_>>(), "decoded");

        if let Some(steps) = self.steps.as_mut() {
            let chunks = self.chunks[self.pos..end].iter().map(|c| c.text.to_string()).collect();
            steps.push(Step { state, rule, chunks });
        }
        self.pos = end;
    }

    /// Apply a header table at the cursor.
    fn take<T>(&mut self, state: &'static str, rules: &[Rule<T>]) -> Option<T> {
        let hit = first_match(rules, self.rest())?;
        self.consume(state, hit.rule, hit.consumed);
        Some(hit.value)
    }

    fn header(&mut self, context: &Context) -> Result<DecodedReport> {
        let kind = self.take("report kind", &fields::REPORT_KIND);

        let station = self
            .take("location", &fields::STATION)
            .ok_or_else(|| ParseError::expecting("location", self.current()))?;
        let time = self
            .take("datetime", &fields::DATETIME)
            .ok_or_else(|| ParseError::expecting("datetime", self.current()))?;

        let mut report = DecodedReport::new(station, time);
        report.kind = kind;
        report.observed_at = observed_at(&time, context);
        report.nil = self.take("nil", &fields::NIL).is_some();

        Ok(report)
    }

    fn body(&mut self, report: &mut DecodedReport, compliance: Compliance) -> Result<()> {
        let mut state_idx = 0;

        while let Some(text) = self.current() {
            if text == REMARKS_MARKER {
                break;
            }

            let accepted = (state_idx..BODY.len()).find_map(|idx| {
                let state = BODY[idx];
                apply_state(state, report, self.rest()).map(|(rule, consumed)| (idx, state, rule, consumed))
            });

            match accepted {
                Some((idx, state, rule, consumed)) => {
                    self.consume(state.name(), rule, consumed);
                    state_idx = state.next(idx);
                }
                None => {
                    let chunks = self.leftover();
                    match compliance {
                        Compliance::Strict => {
                            debug!(?chunks, "unparsable text");
                            return Err(ParseError::Unparsable { chunks });
                        }
                        Compliance::Loose => {
                            debug!(?chunks, "unparsed text");
                            self.pos += chunks.len();
                            report.unparsed = chunks;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Chunks from the cursor up to `RMK` or the end of the report.
    fn leftover(&self) -> Vec<String> {
        self.rest().iter().take_while(|c| c.text != REMARKS_MARKER).map(|c| c.text.to_string()).collect()
    }

    fn remarks(&mut self, report: &mut DecodedReport) {
        if self.current() != Some(REMARKS_MARKER) {
            return;
        }
        self.consume("remarks", REMARKS_MARKER, 1);

        while let Some(text) = self.current() {
            match first_match(&REMARKS, self.rest()) {
                Some(hit) => {
                    report.remarks.push(resolve_remark(hit.value, &report.time));
                    self.consume("remark", hit.rule, hit.consumed);
                }
                None => {
                    trace!(chunk = text, "raw remark");
                    report.remarks.push(Remark::Raw(text.to_string()));
                    self.pos += 1;
                }
            }
        }
    }
}

/// Try one rule table, storing the decoded value on a hit.
fn store<T>(rules: &[Rule<T>], chunks: &[Chunk<'_>], put: impl FnOnce(T)) -> Option<(&'static str, usize)> {
    let hit = first_match(rules, chunks)?;
    put(hit.value);
    Some((hit.rule, hit.consumed))
}

/// Try `state` at the head of `chunks`. Returns the accepting rule and the
/// number of chunks it consumed.
fn apply_state(state: State, report: &mut DecodedReport, chunks: &[Chunk<'_>]) -> Option<(&'static str, usize)> {
    let first = chunks.first()?;

    if report.observer == Observer::Auto
        && first.shape.contains(ChunkShape::ALL_SLASHES)
        && state.is_auto_placeholder(first.text)
    {
        return Some((AUTO_PLACEHOLDER, 1));
    }

    match state {
        State::Observer => store(&fields::OBSERVER, chunks, |o| report.observer = o),
        State::Wind => store(&fields::WIND, chunks, |w| report.wind = Some(w)),
        State::VariableWind => store(&fields::VARIABLE_WIND, chunks, |v| report.variable_wind = Some(v)),
        State::Cavok => store(&fields::CAVOK, chunks, |()| {
            report.cavok = true;
            report.visibility = Some(Visibility::bounded(
                Distance::new(10.0, DistanceUnit::Kilometers),
                Some(Comparator::MoreThan),
            ));
            report.present_weather = vec![WeatherPhenomenon::no_significant_weather()];
            report.sky = vec![SkyCondition::clear()];
        }),
        State::Visibility => store(&fields::VISIBILITY, chunks, |v| report.visibility = Some(v)),
        State::MinimumVisibility => store(&fields::VISIBILITY, chunks, |v| report.minimum_visibility = Some(v)),
        State::RunwayVisualRange => store(&fields::RUNWAY, chunks, |r| report.runway_visibility.push(r)),
        State::PresentWeather if first.text.starts_with("RE") => None,
        State::PresentWeather => store(&fields::WEATHER, chunks, |w| report.present_weather.push(w)),
        State::SkyCondition => store(&fields::SKY, chunks, |s| report.sky.push(s)),
        State::VerticalVisibility => store(&fields::VERTICAL_VISIBILITY, chunks, |d| report.vertical_visibility = Some(d)),
        State::TemperatureDewPoint => store(&fields::TEMPERATURE, chunks, |(t, d)| {
            report.temperature = Some(t);
            report.dew_point = Some(d);
        }),
        State::SeaLevelPressure => store(&fields::PRESSURE, chunks, |p| report.sea_level_pressure = Some(p)),
        State::RecentWeather => {
            let stripped = first.text.strip_prefix("RE").filter(|s| !s.is_empty())?;
            let hit = first_match(&fields::WEATHER, &[Chunk::new(stripped)])?;
            report.recent_weather.push(WeatherPhenomenon { recent: true, ..hit.value });
            Some((hit.rule, 1))
        }
        State::WindShear => store(&fields::WIND_SHEAR, chunks, |w| report.wind_shear.push(w)),
        State::DensityAltitude => store(&fields::DENSITY_ALTITUDE, chunks, |d| report.density_altitude = Some(d)),
        State::Trend => {
            let hit = first_match(&fields::TREND, chunks)?;
            let forecast = || -> Vec<String> {
                chunks[hit.consumed..]
                    .iter()
                    .take_while(|c| c.text != REMARKS_MARKER)
                    .map(|c| c.text.to_string())
                    .collect()
            };
            let trend = match hit.value {
                TrendKind::NoSignificantChange => Trend::NoSignificantChange,
                TrendKind::Becoming => Trend::Becoming(forecast()),
                TrendKind::Temporary => Trend::Temporary(forecast()),
            };
            let consumed = match &trend {
                Trend::NoSignificantChange => hit.consumed,
                Trend::Becoming(rest) | Trend::Temporary(rest) => hit.consumed + rest.len(),
            };
            report.trend = Some(trend);
            Some((hit.rule, consumed))
        }
    }
}
