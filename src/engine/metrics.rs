//! Decode run metrics.
//!
//! `Decoder::run` is the normal path. `Decoder::run_with_metrics` additionally
//! records which grammar state and rule consumed which chunks, plus timing.
//! The step list allocates, so it is only collected on request.

use crate::report::DecodedReport;
use std::time::Duration;

/// One decoded group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Grammar state that accepted the chunks.
    pub state: &'static str,
    /// Rule inside that state's table.
    pub rule: &'static str,
    pub chunks: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Number of chunks the tokenizer produced.
    pub chunks: usize,
}

/// Decoder output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub report: DecodedReport,
    pub steps: Vec<Step>,
    pub metrics: RunMetrics,
}
