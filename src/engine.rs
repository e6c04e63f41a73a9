//! Decoding engine.
//!
//! The engine turns raw report text into a [`DecodedReport`] in one left to
//! right pass. It is split into focused submodules under `src/engine/`:
//!
//! ```text
//! raw text ── tokenize / scan_chunks ──▶ [Chunk]          (tokenizer.rs)
//!                                          │  each chunk carries a ChunkShape
//!                                          v
//!                              Decoder::run (decoder.rs)
//!                                - header: kind, location, datetime, NIL
//!                                - body: ordered grammar states, each one
//!                                  trying its rule table (rule_table.rs)
//!                                - remarks: remark table, raw fallback
//!                                          │
//!                                          v
//!                              resolve (resolve.rs)
//!                                - observation instant from reference time
//!                                - context-dependent remark fields
//!                                          │
//!                                          v
//!                                   DecodedReport
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: whitespace chunking, end-of-message marker handling and
//!   the one-time shape scan of every chunk.
//! - `rule_table.rs`: `ChunkShape` gating bits and positional rule matching.
//!   A rule table is tried in order and the first accepting rule wins.
//! - `decoder.rs`: the grammar state machine and compliance policy.
//! - `resolve.rs`: values that depend on more than one group.
//! - `metrics.rs`: optional step trace and timing for debugging.
//!
//! ## Adding a new field
//!
//! - Write its rules under `src/rules/fields/` and expose the table from
//!   `rules/fields/mod.rs`.
//! - Add a `State` in `decoder.rs` at the right position of `BODY`.
//!
//! ## Debugging
//!
//! The decoder emits `tracing` events at `trace` level for every decoded
//! field and at `debug` level for unparsed chunks.
//!
//! [`DecodedReport`]: crate::report::DecodedReport

#[path = "engine/decoder.rs"]
mod decoder;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/rule_table.rs"]
mod rule_table;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub use decoder::Decoder;
pub use rule_table::ChunkShape;
pub(crate) use rule_table::first_match;
pub use tokenizer::tokenize;

#[cfg(test)]
pub(crate) use rule_table::Hit;
#[cfg(test)]
pub(crate) use tokenizer::scan_chunks;
