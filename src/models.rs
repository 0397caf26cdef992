//! Core data models used throughout Rule Harness.
//!
//! These types represent the rule documents that flow through the ingestion
//! and resolution pipeline. A [`Document`] is the validated form of one rule
//! file; its advice body is an opaque payload that this crate stores and
//! returns but never interprets.

use serde::Serialize;

/// A validated rule document held by the index.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Unique identifier within one index. Defaults to `source_id` unless the
    /// front-matter carries an explicit `id` key.
    pub id: String,
    /// Caller-supplied origin key (relative path or logical name). Kept for
    /// diagnostics even when `id` differs.
    pub source_id: String,
    /// Free-text summary from front-matter. Empty when absent.
    pub description: String,
    /// Validated glob patterns in declaration order. Entries that failed
    /// validation were dropped at load time and reported as issues.
    pub globs: Vec<String>,
    /// Explicit apply-everywhere flag (`matchAll: true` in front-matter).
    /// Honored only when the document has zero valid globs; a literal `*`
    /// glob is an ordinary pattern, not this flag.
    pub match_all: bool,
    /// Advice payload. Never parsed for semantics.
    pub body: String,
    /// Ingestion sequence number. Used only as the final resolution
    /// tie-break.
    pub source_order: usize,
    /// Unrecognized front-matter keys, preserved verbatim as a JSON object.
    pub metadata: serde_json::Value,
    /// SHA-256 hex digest over source id and raw text, for change detection
    /// across reload cycles.
    pub content_hash: String,
}

impl Document {
    /// True when this document can never apply to any path: no valid globs
    /// and no explicit match-all flag.
    pub fn is_inert(&self) -> bool {
        self.globs.is_empty() && !self.match_all
    }
}
