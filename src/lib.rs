extern crate self as metar_decoder;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod report;
mod rules;
pub mod units;

pub use api::{Compliance, Context, DecodeDetails, DecodeResultVerbose, Options, StepSummary, decode, decode_verbose_with, decode_with};
pub use engine::tokenize;
pub use error::{ParseError, Result};
pub use report::{DecodedReport, Observer, Remark};

use crate::engine::ChunkShape;

// --- Rule tables --------------------------------------------------------------

/// One positional item of a rule pattern. Item `i` is matched against the
/// `i`-th chunk after the ones already consumed by earlier items.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// The chunk must match the (anchored) regex.
    Chunk(&'static Regex),

    /// The chunk may match; when it does not, the item is skipped and the
    /// next item is tried against the same chunk.
    Optional(&'static Regex),
}

/// Named capture groups taken from one matched chunk.
///
/// Productions read captures by name only, so which part of the chunk feeds
/// which field stays explicit in each rule.
#[derive(Debug, Clone, Default)]
pub(crate) struct Groups {
    text: String,
    named: Vec<(&'static str, String)>,
    present: bool,
}

impl Groups {
    /// Match `re` against the whole of `text`, keeping every named group that
    /// participated.
    pub(crate) fn capture(re: &'static Regex, text: &str) -> Option<Self> {
        let caps = re.captures(text)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != text.len() {
            return None;
        }
        let named = re
            .capture_names()
            .flatten()
            .filter_map(|name| caps.name(name).map(|m| (name, m.as_str().to_string())))
            .collect();
        Some(Groups { text: text.to_string(), named, present: true })
    }

    /// Placeholder for an optional item that did not match.
    pub(crate) fn absent() -> Self {
        Groups::default()
    }

    pub(crate) fn is_present(&self) -> bool {
        self.present
    }

    /// The whole chunk.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// A named group, `None` when it did not participate or matched nothing.
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.named.iter().find(|(n, v)| *n == name && !v.is_empty()).map(|(_, v)| v.as_str())
    }

    pub(crate) fn int(&self, name: &str) -> Option<i64> {
        self.get(name)?.parse().ok()
    }
}

pub(crate) type Production<T> = Box<dyn Fn(&[Groups]) -> Option<T> + Send + Sync>;

/// A recognizer: a name, a positional `pattern` and a `production` that turns
/// the captured groups into a decoded value, or declines with `None`.
///
/// Rules of one family live in an ordered table; the first rule whose pattern
/// matches and whose production accepts wins.
pub(crate) struct Rule<T> {
    pub name: &'static str,
    pub pattern: Vec<Pattern>,
    pub production: Production<T>,
    /// Shape the first chunk must have before the pattern is even tried.
    pub shape: ChunkShape,
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("production", &"<function>")
            .field("shape", &self.shape)
            .finish()
    }
}
