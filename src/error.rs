//! Decode errors.
//!
//! Only three things can fail a decode: a missing or malformed location, a
//! missing or malformed datetime, and (in strict mode) text that no grammar
//! state accepts. Everything else is either decoded or, for remarks, kept raw.

/// Error returned by [`crate::decode`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A mandatory group was missing or malformed.
    #[error("Expecting {expected}, found {}", .found.as_deref().unwrap_or("end of report"))]
    Expecting {
        /// Name of the expected field.
        expected: &'static str,
        /// The offending chunk, `None` when the report ended early.
        found: Option<String>,
    },

    /// Strict mode only: chunks left over after the grammar was walked.
    #[error("Unparsable text found: {}", .chunks.join(" "))]
    Unparsable {
        /// The leftover chunks, in report order.
        chunks: Vec<String>,
    },
}

impl ParseError {
    pub(crate) fn expecting(expected: &'static str, found: Option<&str>) -> Self {
        ParseError::Expecting { expected, found: found.map(str::to_string) }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
