//! Validation issue accumulation for corpus ingestion.
//!
//! A [`ValidationReporter`] collects structural problems found while loading
//! a corpus without ever aborting the batch: a malformed document or glob
//! produces an [`Issue`] and the load moves on. Callers inspect the final
//! issue list to decide whether to proceed, warn, or abort — policy lives
//! above this crate.

use serde::Serialize;

/// Classification of a single validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// A front-matter block was opened with `---` but never closed. The
    /// whole document is excluded from the index.
    UnterminatedFrontMatter,
    /// One glob entry failed validation or compilation. Only that entry is
    /// dropped; the document keeps its remaining globs.
    InvalidPattern,
    /// A later document reused an id already in the index. The first-seen
    /// document wins; the later one is dropped.
    DuplicateId,
    /// The load finished with zero documents in the index.
    EmptyCorpus,
}

/// How serious an [`IssueKind`] is, for warn-vs-abort policy upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl IssueKind {
    pub fn severity(self) -> Severity {
        match self {
            IssueKind::UnterminatedFrontMatter | IssueKind::InvalidPattern => Severity::Error,
            IssueKind::DuplicateId => Severity::Warning,
            IssueKind::EmptyCorpus => Severity::Info,
        }
    }
}

/// One validation finding, attributed to the source that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Source id (or document id, once assigned) the finding is about. The
    /// `EmptyCorpus` issue uses an empty source id since it concerns the
    /// batch as a whole.
    pub source_id: String,
    pub kind: IssueKind,
    pub severity: Severity,
    /// Human-readable detail, e.g. the offending pattern text.
    pub detail: String,
}

/// Accumulates [`Issue`]s during a single ingestion pass.
///
/// Never propagates mid-batch; ingestion of the whole corpus always runs to
/// completion (or caller-requested cancellation).
#[derive(Debug, Default)]
pub struct ValidationReporter {
    issues: Vec<Issue>,
}

impl ValidationReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding. Severity is derived from the kind.
    pub fn push(&mut self, source_id: impl Into<String>, kind: IssueKind, detail: impl Into<String>) {
        self.issues.push(Issue {
            source_id: source_id.into(),
            kind,
            severity: kind.severity(),
            detail: detail.into(),
        });
    }

    /// All findings so far, in the order they were recorded.
    pub fn report(&self) -> &[Issue] {
        &self.issues
    }

    /// Consume the reporter, yielding the accumulated findings.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// True when any finding is error severity.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(IssueKind::UnterminatedFrontMatter.severity(), Severity::Error);
        assert_eq!(IssueKind::InvalidPattern.severity(), Severity::Error);
        assert_eq!(IssueKind::DuplicateId.severity(), Severity::Warning);
        assert_eq!(IssueKind::EmptyCorpus.severity(), Severity::Info);
    }

    #[test]
    fn test_reporter_accumulates_in_order() {
        let mut reporter = ValidationReporter::new();
        reporter.push("a.md", IssueKind::DuplicateId, "id 'x' already taken");
        reporter.push("b.md", IssueKind::InvalidPattern, "bad glob '***'");
        let issues = reporter.report();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].source_id, "a.md");
        assert_eq!(issues[1].source_id, "b.md");
        assert!(reporter.has_errors());
    }

    #[test]
    fn test_warnings_alone_are_not_errors() {
        let mut reporter = ValidationReporter::new();
        reporter.push("a.md", IssueKind::DuplicateId, "dup");
        reporter.push("", IssueKind::EmptyCorpus, "no documents loaded");
        assert!(!reporter.has_errors());
    }
}
