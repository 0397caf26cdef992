//! # Rule Harness
//!
//! Validation, indexing, and path resolution for corpora of Markdown rule
//! documents consumed by AI-assist tooling.
//!
//! A rule document is UTF-8 text with an optional `---`-fenced front-matter
//! block (`description`, `globs`, `matchAll`, `id`) followed by an opaque
//! advice body. Rule Harness ingests a whole corpus of them, reports
//! structural problems without aborting the batch, and answers the question
//! an IDE integration actually asks: *which rules apply to this file path,
//! and in what order?*
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌───────────┐
//! │ raw texts    │──▶│ frontmatter │──▶│ RuleIndex │──▶ resolve(path)
//! │ (caller I/O) │   │ + glob      │   │ snapshot  │    most-specific-first
//! └──────────────┘   └─────────────┘   └─────┬─────┘
//!                          │                 │
//!                          ▼                 ▼
//!                    ┌──────────┐      ┌──────────────┐
//!                    │  Issues  │      │ SnapshotCell │
//!                    │ (report) │      │ (hot reload) │
//!                    └──────────┘      └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rule_harness::{load_corpus, resolve_rules_for_file};
//!
//! let outcome = load_corpus(vec![
//!     (
//!         "python.md".to_string(),
//!         "---\ndescription: Python style\nglobs: **/*.py\n---\nPrefer pathlib.".to_string(),
//!     ),
//!     (
//!         "general.md".to_string(),
//!         "---\nmatchAll: true\n---\nKeep functions small.".to_string(),
//!     ),
//! ]);
//! assert!(!outcome.has_errors());
//!
//! let rules = resolve_rules_for_file(&outcome.index, "src/app.py");
//! assert_eq!(rules[0].id, "python.md");
//! assert_eq!(rules[1].id, "general.md");
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Core data types |
//! | [`frontmatter`] | Front-matter parsing |
//! | [`glob`] | Pattern validation, matching, specificity |
//! | [`index`] | Immutable rule index |
//! | [`resolve`] | Applicability and ordering |
//! | [`report`] | Validation issue accumulation |
//! | [`corpus`] | Load pipeline and API surface |
//! | [`snapshot`] | Concurrent snapshot publication |

pub mod corpus;
pub mod frontmatter;
pub mod glob;
pub mod index;
pub mod models;
pub mod report;
pub mod resolve;
pub mod snapshot;

pub use corpus::{load_corpus, load_corpus_cancellable, resolve_rules_for_file, LoadOutcome};
pub use index::{CompiledRule, RuleIndex};
pub use models::Document;
pub use report::{Issue, IssueKind, Severity, ValidationReporter};
pub use snapshot::SnapshotCell;
