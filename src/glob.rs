//! Glob pattern validation, compilation, and specificity scoring.
//!
//! Rule documents scope themselves to files with a restricted glob dialect:
//! ASCII alphanumerics plus `* ? . / - _`. `*` matches within a path
//! component, `**` matches across separators, `?` matches one non-separator
//! character. Matching is case-sensitive and anchored to the full candidate
//! path — the same discipline the ingestion connectors apply to their
//! include/exclude sets.
//!
//! Compilation also assigns each pattern a *specificity* score: the count of
//! literal characters minus a penalty per wildcard, with `**` penalized more
//! than `*` and `*` more than `?`. Resolution uses the score purely to rank
//! overlapping matches (most targeted rule first); it never filters.

use globset::{GlobBuilder, GlobMatcher};
use thiserror::Error;

/// Per-wildcard specificity penalties. Chosen so that any extra literal
/// segment outweighs swapping a `?` for a `*`, and a recursive `**` always
/// ranks below a single-component `*` over the same literals.
const STAR_PENALTY: i64 = 2;
const DOUBLE_STAR_PENALTY: i64 = 8;
const QUESTION_PENALTY: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobError {
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl GlobError {
    fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        GlobError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// A compiled, anchored glob with its precomputed specificity.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    matcher: GlobMatcher,
    specificity: i64,
}

impl Matcher {
    /// The validated pattern text this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whole-path, case-sensitive match (implicit `^...$`).
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// Literal-character count minus wildcard penalties. Higher is more
    /// specific.
    pub fn specificity(&self) -> i64 {
        self.specificity
    }
}

/// Validate and compile one pattern.
///
/// Rejects the empty pattern, characters outside the rule-glob alphabet, and
/// runs of three or more `*`. A failure invalidates only this pattern; the
/// caller drops the entry and keeps the document's remaining globs.
pub fn compile(pattern: &str) -> Result<Matcher, GlobError> {
    let specificity = score(pattern)?;

    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| GlobError::invalid(pattern, e.kind().to_string()))?;

    Ok(Matcher {
        pattern: pattern.to_string(),
        matcher: glob.compile_matcher(),
        specificity,
    })
}

/// Validate the pattern alphabet and compute the specificity score.
fn score(pattern: &str) -> Result<i64, GlobError> {
    if pattern.is_empty() {
        return Err(GlobError::invalid(pattern, "empty pattern"));
    }

    let mut specificity: i64 = 0;
    let mut star_run: u32 = 0;

    // The trailing `None` flushes a star run that ends the pattern.
    for c in pattern.chars().map(Some).chain(std::iter::once(None)) {
        if c == Some('*') {
            star_run += 1;
            continue;
        }
        match star_run {
            0 => {}
            1 => specificity -= STAR_PENALTY,
            2 => specificity -= DOUBLE_STAR_PENALTY,
            _ => {
                return Err(GlobError::invalid(
                    pattern,
                    "three or more consecutive '*'",
                ))
            }
        }
        star_run = 0;

        match c {
            None => {}
            Some('?') => specificity -= QUESTION_PENALTY,
            Some(c) if c.is_ascii_alphanumeric() => specificity += 1,
            Some('.') | Some('/') | Some('-') | Some('_') => specificity += 1,
            Some(other) => {
                return Err(GlobError::invalid(
                    pattern,
                    format!("character '{}' is not allowed", other),
                ))
            }
        }
    }

    Ok(specificity)
}
