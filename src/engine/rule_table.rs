//! Rule tables and positional matching.
//!
//! A field or remark family is a *closed, ordered* table of [`Rule`]s. Some
//! formats are syntactic prefixes of others (`9999` is also a bare four-digit
//! distance), so order is part of the grammar: the first rule that matches and
//! whose production accepts wins. There is no backtracking into other tables.
//!
//! Matching a rule at a position:
//!
//! ```text
//! chunks:   [ "1" , "3/4SM" , "-SN" , ... ]
//!              │       │
//! pattern:  [ Chunk(\d) , Chunk(n/dSM) ]      consumed = 2
//!              │       │
//!           [ Groups , Groups ] ──▶ production ──▶ Some(Visibility)
//! ```
//!
//! `Pattern::Optional` items are greedy: when the chunk matches it is
//! consumed, otherwise the production sees `Groups::absent()` for that slot.
//!
//! ## Shape gating
//!
//! Every chunk is scanned once into a [`ChunkShape`]. A rule may declare a
//! shape its first chunk must contain; rules that cannot match are skipped
//! before their regexes run.
//!
//! [`Rule`]: crate::Rule

use super::tokenizer::Chunk;
use crate::{Groups, Pattern, Rule};

bitflags::bitflags! {
    /// Coarse features of a single chunk.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChunkShape: u8 {
        const HAS_DIGITS  = 1 << 0;
        const HAS_LETTERS = 1 << 1;
        const HAS_SLASH   = 1 << 2;
        const ALL_DIGITS  = 1 << 3;
        const ALL_SLASHES = 1 << 4;
    }
}

/// A successful rule application.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<T> {
    pub value: T,
    /// Number of chunks the rule consumed (always at least one).
    pub consumed: usize,
    /// Name of the rule that produced `value`.
    pub rule: &'static str,
}

impl<T> Rule<T> {
    /// Try this rule against the chunks starting at the current position.
    pub(crate) fn apply(&self, chunks: &[Chunk<'_>]) -> Option<Hit<T>> {
        let first = chunks.first()?;
        if !first.shape.contains(self.shape) {
            return None;
        }

        let mut groups = Vec::with_capacity(self.pattern.len());
        let mut consumed = 0;

        for item in &self.pattern {
            match item {
                Pattern::Chunk(re) => {
                    let chunk = chunks.get(consumed)?;
                    groups.push(Groups::capture(re, chunk.text)?);
                    consumed += 1;
                }
                Pattern::Optional(re) => match chunks.get(consumed).and_then(|c| Groups::capture(re, c.text)) {
                    Some(g) => {
                        groups.push(g);
                        consumed += 1;
                    }
                    None => groups.push(Groups::absent()),
                },
            }
        }

        if consumed == 0 {
            return None;
        }

        let value = (self.production)(&groups)?;
        Some(Hit { value, consumed, rule: self.name })
    }
}

/// Apply `rules` in order and return the first hit.
pub(crate) fn first_match<T>(rules: &[Rule<T>], chunks: &[Chunk<'_>]) -> Option<Hit<T>> {
    rules.iter().find_map(|rule| rule.apply(chunks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenizer::scan_chunks;

    fn two_chunk_rule() -> Rule<(i64, i64)> {
        rule! {
            name: "pair",
            pattern: [re!(r"^(?P<a>\d+)$"), opt!(r"^X$"), re!(r"^(?P<b>\d+)$")],
            shape: ChunkShape::ALL_DIGITS,
            prod: |groups: &[Groups]| -> Option<(i64, i64)> {
                Some((groups[0].int("a")?, groups[2].int("b")?))
            },
        }
    }

    #[test]
    fn consumes_every_matched_item() {
        let chunks = scan_chunks("12 X 34 rest");
        let hit = two_chunk_rule().apply(&chunks).unwrap();
        assert_eq!(hit.value, (12, 34));
        assert_eq!(hit.consumed, 3);
        assert_eq!(hit.rule, "pair");
    }

    #[test]
    fn optional_item_may_be_absent() {
        let chunks = scan_chunks("12 34");
        let hit = two_chunk_rule().apply(&chunks).unwrap();
        assert_eq!(hit.consumed, 2);
    }

    #[test]
    fn shape_gate_rejects_before_matching() {
        let chunks = scan_chunks("A1 34");
        assert!(two_chunk_rule().apply(&chunks).is_none());
    }

    #[test]
    fn first_accepting_rule_wins() {
        let rules: Vec<Rule<&'static str>> = vec![
            rule! {
                name: "declines",
                pattern: [re!(r"^\d{4}$")],
                prod: |_groups: &[Groups]| -> Option<&'static str> { None },
            },
            rule! {
                name: "accepts",
                pattern: [re!(r"^\d{4}$")],
                prod: |_groups: &[Groups]| -> Option<&'static str> { Some("second") },
            },
        ];
        let chunks = scan_chunks("9999");
        let hit = first_match(&rules, &chunks).unwrap();
        assert_eq!(hit.value, "second");
        assert_eq!(hit.rule, "accepts");
        assert!(first_match(&rules, &[]).is_none());
    }
}
