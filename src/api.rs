use crate::engine;
use crate::error::Result;
use crate::report::DecodedReport;
use chrono::NaiveDateTime;
use std::time::Duration;

/// How leftover body text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compliance {
    /// Any chunk no grammar state accepts fails the decode.
    #[default]
    Strict,
    /// The first unrecognised chunk and everything after it up to `RMK` are
    /// kept in `DecodedReport::unparsed`.
    Loose,
}

/// Decoding context.
///
/// A report only carries day-of-month, hour and minute. With a reference time
/// the decoder also fills in `DecodedReport::observed_at`.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Time the report was retrieved (or any instant shortly after it was issued).
    pub reference_time: Option<NaiveDateTime>,
}

/// Options that affect decoding behavior. Read once per decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub compliance: Compliance,
}

/// One decoded group in a verbose trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    /// Grammar state, e.g. `"wind"` or `"remark"`.
    pub state: String,
    /// Rule that accepted the chunks.
    pub rule: String,
    pub chunks: Vec<String>,
}

/// Additional details returned by [`decode_verbose_with`].
///
/// Meant for debugging rule tables without dumping internal state.
#[derive(Debug, Clone)]
pub struct DecodeDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Number of chunks after tokenizing.
    pub chunk_count: usize,
    /// Every decoded group, in report order.
    pub steps: Vec<StepSummary>,
}

/// Result from [`decode_verbose_with`].
#[derive(Debug, Clone)]
pub struct DecodeResultVerbose {
    pub report: DecodedReport,
    pub details: DecodeDetails,
}

/// Decode one raw report.
///
/// # Example
/// ```
/// use metar_decoder::{Compliance, decode};
///
/// let report = decode("PAIL 061610Z 24006KT 1 3/4SM -SN BKN016 OVC030 M17/M20 A2910", Compliance::Strict).unwrap();
/// assert_eq!(report.station, "PAIL");
/// assert_eq!(report.sky.len(), 2);
/// ```
pub fn decode(raw: &str, compliance: Compliance) -> Result<DecodedReport> {
    decode_with(raw, &Context::default(), &Options { compliance })
}

/// Decode `raw` with the provided `context`/`options`.
///
/// Use this to resolve the observation time against a reference.
pub fn decode_with(raw: &str, context: &Context, options: &Options) -> Result<DecodedReport> {
    engine::Decoder::new(raw).run(context, options)
}

/// Decode `raw` and return the step trace and timing alongside the report.
///
/// The plain [`decode_with`] path does not allocate the trace.
pub fn decode_verbose_with(raw: &str, context: &Context, options: &Options) -> Result<DecodeResultVerbose> {
    let run = engine::Decoder::new(raw).run_with_metrics(context, options)?;

    let steps = run
        .steps
        .into_iter()
        .map(|step| StepSummary { state: step.state.to_string(), rule: step.rule.to_string(), chunks: step.chunks })
        .collect();

    let details = DecodeDetails { total: run.metrics.total, chunk_count: run.metrics.chunks, steps };

    Ok(DecodeResultVerbose { report: run.report, details })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use chrono::NaiveDate;

    fn reference_context() -> Context {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap().and_hms_opt(16, 30, 0).unwrap();
        Context { reference_time: Some(reference) }
    }

    #[test]
    fn defaults_are_strict_without_reference() {
        assert_eq!(Options::default().compliance, Compliance::Strict);
        assert!(Context::default().reference_time.is_none());
    }

    #[test]
    fn decode_with_resolves_observation_time() {
        let report = decode_with("PAIL 061610Z 24006KT", &reference_context(), &Options::default()).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap().and_hms_opt(16, 10, 0).unwrap();
        assert_eq!(report.observed_at, Some(expected));

        let report = decode("PAIL 061610Z 24006KT", Compliance::Strict).unwrap();
        assert_eq!(report.observed_at, None);
    }

    #[test]
    fn verbose_lists_steps() {
        let out = decode_verbose_with("PAIL 061610Z 24006KT RMK AO2", &Context::default(), &Options::default()).unwrap();
        assert_eq!(out.details.chunk_count, 5);
        let states: Vec<&str> = out.details.steps.iter().map(|s| s.state.as_str()).collect();
        assert_eq!(states, vec!["location", "datetime", "wind", "remarks", "remark"]);
        assert_eq!(out.details.steps[4].chunks, vec!["AO2".to_string()]);
    }

    #[test]
    fn verbose_propagates_errors() {
        let err = decode_verbose_with("PAIL", &Context::default(), &Options::default()).unwrap_err();
        assert_eq!(err, ParseError::Expecting { expected: "datetime", found: None });
    }
}
