//! Rule resolution: which documents apply to a path, in what order.
//!
//! The resolution engine is a pure ranking function over an immutable
//! [`RuleIndex`] — no locking, no I/O, no failure modes. An empty result is
//! a normal outcome for a path no rule covers.
//!
//! # Ordering
//!
//! 1. Every rule's compiled globs are tested against the target path; a
//!    rule is applicable when at least one glob matches, or when it has no
//!    globs at all and carries the explicit match-all flag. A document that
//!    declares globs is scoped by them — the flag does not widen it.
//! 2. Applicable rules are ranked by the best (highest) specificity among
//!    their matching globs, descending, so the most targeted advice comes
//!    first. Match-all applicability without a matching glob ranks below
//!    every pattern match.
//! 3. Ties break on ascending ingestion order, which makes the full
//!    ordering deterministic across runs.

use crate::index::RuleIndex;
use crate::models::Document;

/// Rank sentinel for rules applicable only through their match-all flag.
/// Any real pattern match outranks it.
const MATCH_ALL_SPECIFICITY: i64 = i64::MIN;

/// Resolve the ordered, deduplicated set of documents applicable to
/// `target_path`.
///
/// Paths are compared as-is: matching is case-sensitive and the caller is
/// expected to pass the same relative-path shape the rule globs were
/// written against.
pub fn resolve<'a>(index: &'a RuleIndex, target_path: &str) -> Vec<&'a Document> {
    struct Applicable<'a> {
        document: &'a Document,
        best_specificity: i64,
    }

    let mut applicable: Vec<Applicable<'_>> = Vec::new();

    for rule in index.all() {
        let best_match = rule
            .matchers
            .iter()
            .filter(|m| m.matches(target_path))
            .map(|m| m.specificity())
            .max();

        let best_specificity = match best_match {
            Some(score) => score,
            None if rule.matchers.is_empty() && rule.document.match_all => MATCH_ALL_SPECIFICITY,
            None => continue,
        };

        applicable.push(Applicable {
            document: &rule.document,
            best_specificity,
        });
    }

    applicable.sort_by(|a, b| {
        b.best_specificity
            .cmp(&a.best_specificity)
            .then(a.document.source_order.cmp(&b.document.source_order))
    });

    applicable.into_iter().map(|a| a.document).collect()
}
