//! Immutable rule index snapshot.
//!
//! A [`RuleIndex`] owns every [`CompiledRule`] for one corpus load. It is
//! built once, never mutated, and shared by reference (or `Arc`, see
//! [`crate::snapshot`]) with any number of concurrent readers. A reload
//! builds a brand-new index off to the side; nothing here supports partial
//! updates, so readers can never observe a half-loaded corpus.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::glob::Matcher;
use crate::models::Document;
use crate::report::{IssueKind, ValidationReporter};

/// A document together with its compiled glob matchers.
///
/// Matchers are compiled once at load time so `resolve` never recompiles a
/// pattern. The matcher list parallels `document.globs`.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub document: Document,
    pub matchers: Vec<Matcher>,
}

/// Immutable snapshot of one corpus load.
#[derive(Debug)]
pub struct RuleIndex {
    rules: Vec<CompiledRule>,
    by_id: HashMap<String, usize>,
    built_at: DateTime<Utc>,
}

impl RuleIndex {
    /// Build an index from compiled rules, deduplicating by document id.
    ///
    /// On collision the first-seen document wins and each later one is
    /// dropped with a `DuplicateId` warning; the batch continues.
    pub fn build(rules: Vec<CompiledRule>, reporter: &mut ValidationReporter) -> RuleIndex {
        let mut kept: Vec<CompiledRule> = Vec::with_capacity(rules.len());
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(rules.len());

        for rule in rules {
            match by_id.entry(rule.document.id.clone()) {
                Entry::Occupied(existing) => {
                    let winner = &kept[*existing.get()].document;
                    reporter.push(
                        rule.document.source_id.clone(),
                        IssueKind::DuplicateId,
                        format!(
                            "id '{}' already assigned to '{}'",
                            rule.document.id, winner.source_id
                        ),
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(rule);
                }
            }
        }

        RuleIndex {
            rules: kept,
            by_id,
            built_at: Utc::now(),
        }
    }

    /// All rules in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.rules.iter().map(|r| &r.document)
    }

    /// Look up a document by id.
    pub fn by_id(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&i| &self.rules[i].document)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// When this snapshot was built (UTC). Distinguishes snapshots across
    /// reload cycles in diagnostics.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
