//! Front-matter parsing for rule documents.
//!
//! A rule document optionally begins with a front-matter block fenced by
//! lines containing only `---`; everything after the closing fence is the
//! opaque advice body. Front-matter is a flat `key: value` mapping. The
//! interpreted keys are enumerated here — `description`, `globs`,
//! `matchAll`, and `id` — and every other key is preserved verbatim in the
//! document's `metadata` object without being interpreted. New keys require
//! a code change, not dynamic dispatch.
//!
//! # Algorithm
//!
//! 1. If the first line is not exactly `---`, the whole text is the body
//!    (permissive: payload content is opaque, absence of metadata is fine).
//! 2. Otherwise scan for a closing `---` line; no closing fence is a hard
//!    [`ParseError::UnterminatedFrontMatter`] and rejects the document.
//! 3. Split each block line on the first `:`; lines without one are skipped.
//! 4. `globs` is split on commas, entries trimmed, empties dropped silently.
//!
//! Trailing `\r` is tolerated on fence and key lines so CRLF corpora parse
//! the same as LF ones.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::Document;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("front-matter block opened with '---' but never closed")]
    UnterminatedFrontMatter,
}

/// Parse one raw document into a [`Document`].
///
/// The returned document carries raw, trimmed glob entries exactly as
/// declared; pattern validation happens later in the load pipeline so that
/// an invalid entry can be dropped and reported without rejecting the
/// document. `source_order` is `0` until the pipeline assigns the real
/// ingestion sequence number.
pub fn parse_document(raw: &str, source_id: &str) -> Result<Document, ParseError> {
    let (front, body) = split_front_matter(raw)?;

    let mut id: Option<String> = None;
    let mut description = String::new();
    let mut globs: Vec<String> = Vec::new();
    let mut match_all = false;
    let mut metadata = serde_json::Map::new();

    if let Some(front) = front {
        for line in front.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match key {
                "description" => description = value.to_string(),
                "globs" => {
                    globs = value
                        .split(',')
                        .map(str::trim)
                        .filter(|entry| !entry.is_empty())
                        .map(String::from)
                        .collect();
                }
                "matchAll" => match_all = parse_bool(value),
                "id" if !value.is_empty() => id = Some(value.to_string()),
                "" => {}
                other => {
                    // Last occurrence wins, same as the interpreted keys.
                    metadata.insert(
                        other.to_string(),
                        serde_json::Value::String(value.to_string()),
                    );
                }
            }
        }
    }

    Ok(Document {
        id: id.unwrap_or_else(|| source_id.to_string()),
        source_id: source_id.to_string(),
        description,
        globs,
        match_all,
        body: body.to_string(),
        source_order: 0,
        metadata: serde_json::Value::Object(metadata),
        content_hash: content_hash(source_id, raw),
    })
}

/// SHA-256 over source id and raw text, for reload change detection.
fn content_hash(source_id: &str, raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Split raw text into an optional front-matter block and the body.
///
/// Returns `(None, raw)` when there is no opening fence. The block slice
/// excludes both fence lines; the body starts on the line after the closing
/// fence.
fn split_front_matter(raw: &str) -> Result<(Option<&str>, &str), ParseError> {
    let first_end = raw.find('\n');
    let first_line = match first_end {
        Some(i) => &raw[..i],
        None => raw,
    };
    if strip_cr(first_line) != "---" {
        return Ok((None, raw));
    }

    // Opening fence with no following line cannot be terminated.
    let block_start = match first_end {
        Some(i) => i + 1,
        None => return Err(ParseError::UnterminatedFrontMatter),
    };

    let mut pos = block_start;
    while pos <= raw.len() {
        let line_end = raw[pos..].find('\n').map(|i| pos + i);
        let line = match line_end {
            Some(end) => &raw[pos..end],
            None => &raw[pos..],
        };
        if strip_cr(line) == "---" {
            let block = &raw[block_start..pos];
            let body = match line_end {
                Some(end) => &raw[end + 1..],
                None => "",
            };
            return Ok((Some(block), body));
        }
        match line_end {
            Some(end) => pos = end + 1,
            None => break,
        }
    }

    Err(ParseError::UnterminatedFrontMatter)
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value == "1"
}
