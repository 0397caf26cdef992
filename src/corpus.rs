//! Corpus loading pipeline.
//!
//! Coordinates the full ingestion flow: raw text → front-matter parse →
//! glob validation and compilation → id dedup → immutable [`RuleIndex`]
//! snapshot. Per-document and per-glob failures are contained: they become
//! [`Issue`]s and the rest of the batch still loads. The pipeline reads no
//! files itself — callers hand it `(source_id, raw_text)` pairs from
//! whatever collaborator owns I/O.

use crate::frontmatter;
use crate::index::{CompiledRule, RuleIndex};
use crate::models::Document;
use crate::report::{Issue, IssueKind, Severity, ValidationReporter};

/// Result of one corpus load: the snapshot plus everything worth telling
/// the caller about.
#[derive(Debug)]
pub struct LoadOutcome {
    pub index: RuleIndex,
    pub issues: Vec<Issue>,
}

impl LoadOutcome {
    /// True when any issue is error severity. Whether that warrants
    /// aborting is the caller's policy, not this crate's.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Load a corpus of rule documents into an immutable index.
///
/// `sources` yields `(source_id, raw_text)` pairs; iteration order defines
/// ingestion order and therefore the final resolution tie-break. The load
/// always completes — malformed documents and invalid globs are reported,
/// never thrown.
pub fn load_corpus(sources: impl IntoIterator<Item = (String, String)>) -> LoadOutcome {
    load_inner(sources, &|| false).expect("load without a cancellation hook always completes")
}

/// Like [`load_corpus`], but checks `cancel` between documents.
///
/// Returns `None` when the pass was abandoned. No partial snapshot ever
/// escapes: either the whole corpus was ingested or the caller gets
/// nothing, so an old published snapshot stays authoritative.
pub fn load_corpus_cancellable(
    sources: impl IntoIterator<Item = (String, String)>,
    cancel: &dyn Fn() -> bool,
) -> Option<LoadOutcome> {
    load_inner(sources, cancel)
}

/// Resolve the ordered rule documents applicable to `path`.
///
/// Thin alias for [`crate::resolve::resolve`], named for the integration
/// surface IDE/assistant callers use.
pub fn resolve_rules_for_file<'a>(index: &'a RuleIndex, path: &str) -> Vec<&'a Document> {
    crate::resolve::resolve(index, path)
}

fn load_inner(
    sources: impl IntoIterator<Item = (String, String)>,
    cancel: &dyn Fn() -> bool,
) -> Option<LoadOutcome> {
    let mut reporter = ValidationReporter::new();
    let mut rules: Vec<CompiledRule> = Vec::new();

    for (source_id, raw_text) in sources {
        if cancel() {
            return None;
        }

        let mut document = match frontmatter::parse_document(&raw_text, &source_id) {
            Ok(doc) => doc,
            Err(err) => {
                reporter.push(
                    source_id,
                    IssueKind::UnterminatedFrontMatter,
                    err.to_string(),
                );
                continue;
            }
        };

        // Validate each declared glob independently: a bad entry is dropped
        // and reported, the document keeps the rest.
        let mut valid_globs = Vec::with_capacity(document.globs.len());
        let mut matchers = Vec::with_capacity(document.globs.len());
        for pattern in &document.globs {
            match crate::glob::compile(pattern) {
                Ok(matcher) => {
                    valid_globs.push(pattern.clone());
                    matchers.push(matcher);
                }
                Err(err) => {
                    reporter.push(
                        document.source_id.as_str(),
                        IssueKind::InvalidPattern,
                        err.to_string(),
                    );
                }
            }
        }
        document.globs = valid_globs;
        document.source_order = rules.len();

        rules.push(CompiledRule { document, matchers });
    }

    let index = RuleIndex::build(rules, &mut reporter);

    if index.is_empty() {
        reporter.push("", IssueKind::EmptyCorpus, "no documents loaded");
    }

    Some(LoadOutcome {
        index,
        issues: reporter.into_issues(),
    })
}
