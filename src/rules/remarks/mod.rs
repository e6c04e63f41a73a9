//! Remark recognizers, applied to every chunk after `RMK`.
//!
//! A separate closed family from the body fields. A chunk no rule accepts is
//! kept as `Remark::Raw`; remarks never fail a decode.

use once_cell::sync::Lazy;

use crate::Rule;
use crate::report::Remark;

mod helpers;
mod rules;

#[cfg(test)]
mod tests;

pub(crate) static REMARKS: Lazy<Vec<Rule<Remark>>> = Lazy::new(rules::remark_rules);
