//! Context-dependent resolution.
//!
//! A few values cannot be fixed by looking at one group alone:
//!
//! - the full observation instant needs a reference time (`Context`);
//! - a `6RRRR` precipitation remark covers 3 or 6 hours depending on which
//!   synoptic hour the observation is closest to.
//!
//! Rules produce the context-free value and the decoder passes it through
//! here once the header is known.

use crate::api::Context;
use crate::report::{ObservationTime, Remark};
use chrono::NaiveDateTime;

/// Full timestamp of the observation, when the context carries a reference.
pub(crate) fn observed_at(time: &ObservationTime, context: &Context) -> Option<NaiveDateTime> {
    context.reference_time.and_then(|reference| time.resolve(reference))
}

/// Period of a `6RRRR` group: 3 hours near 03/09/15/21Z, else 6 hours.
pub(crate) fn precipitation_period(time: &ObservationTime) -> u8 {
    let hour = (time.hour + u32::from(time.minute >= 30)) % 24;
    if hour % 6 == 3 { 3 } else { 6 }
}

/// Remarks whose meaning depends on the observation time.
pub(crate) fn resolve_remark(remark: Remark, time: &ObservationTime) -> Remark {
    match remark {
        // The `6RRRR` rule emits period 6; narrow it when the hour says so.
        Remark::Precipitation { period: 6, amount } => {
            Remark::Precipitation { period: precipitation_period(time), amount }
        }
        other => other,
    }
}
