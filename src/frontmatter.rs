//! Front-matter extraction, validation, and normalization.
//!
//! Every published document carries a metadata block between two `---`
//! delimiter lines:
//!
//! ```text
//! ---
//! title: Finding the minimum of a vector
//! author: Jane Doe
//! license: MIT
//! tags: stl featured
//! summary: Demonstrates how min_element can be used.
//! ---
//! Body prose...
//! ```
//!
//! [`normalize`] locates the block, validates it, amends it, and returns the
//! reconstructed document:
//!
//! - `title`, `author`, `summary`, `license` are required; `license` must be
//!   exactly `"MIT"` after trimming.
//! - `tags` is optional and space-separated — a comma is rejected as
//!   malformed. Each tag token ensures a tag index page through the injected
//!   [`TagSink`]. A missing `tags` field is a warning, not an error.
//! - `layout: post` is appended if no layout field is present, and
//!   `src: <base name>` is always appended, both before the closing
//!   delimiter.
//!
//! Interior lines are scanned once into a field map, then validated with
//! plain lookups. Lines that are not `key: value` pairs (e.g. two-space
//! continuations of the previous field) are ignored by the scan but preserved
//! verbatim in the reconstruction.
//!
//! All validation failures abort the single document's conversion; the
//! surrounding build treats them as a hard stop for that document.

use crate::tags::{TagError, TagSink};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// The front-matter delimiter token.
pub const DELIMITER: &str = "---";

/// The only license accepted for publication.
pub const REQUIRED_LICENSE: &str = "MIT";

/// Layout injected when the document does not name one.
pub const DEFAULT_LAYOUT: &str = "post";

/// Required metadata fields, checked in this order.
const REQUIRED_FIELDS: &[&str] = &["title", "author", "summary", "license"];

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("No front matter block found (need two '---' delimiter lines)")]
    MissingFrontMatter,
    #[error("Front matter block is empty")]
    EmptyFrontMatter,
    #[error("Missing required front matter field: {0}")]
    MissingField(String),
    #[error("License must be exactly 'MIT', got '{0}'")]
    License(String),
    #[error("Tags must be space-separated, found a comma in '{0}'")]
    TagFormat(String),
    #[error("Tag page error: {0}")]
    Tag(#[from] TagError),
}

static DELIMITER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*---[ \t]*$").unwrap());
static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+):(.*)$").unwrap());

/// A normalized document plus everything the caller reports on.
#[derive(Debug)]
pub struct Normalized {
    /// Reconstructed document lines, amendments included.
    pub lines: Vec<String>,
    /// Non-fatal findings (currently only a missing `tags` field).
    pub warnings: Vec<String>,
    /// The document's title, for display.
    pub title: Option<String>,
    /// Tag tokens, in document order.
    pub tags: Vec<String>,
}

/// Validate and normalize a document's front matter.
///
/// `src_name` is the input file's base name, injected as the `src:` field.
/// Tag side effects go through `sink`.
pub fn normalize(
    lines: &[String],
    src_name: &str,
    sink: &mut dyn TagSink,
) -> Result<Normalized, FrontMatterError> {
    let mut delimiters = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| DELIMITER_LINE.is_match(line))
        .map(|(idx, _)| idx);
    let open = delimiters
        .next()
        .ok_or(FrontMatterError::MissingFrontMatter)?;
    let close = delimiters
        .next()
        .ok_or(FrontMatterError::MissingFrontMatter)?;
    if close == open + 1 {
        return Err(FrontMatterError::EmptyFrontMatter);
    }

    let interior = &lines[open + 1..close];

    // Single pass over the block; first occurrence of a field wins.
    let mut fields: BTreeMap<&str, String> = BTreeMap::new();
    for line in interior {
        if let Some(caps) = FIELD_LINE.captures(line) {
            let key = caps.get(1).unwrap().as_str();
            let value = caps.get(2).unwrap().as_str().trim().to_string();
            fields.entry(key).or_insert(value);
        }
    }

    for field in REQUIRED_FIELDS {
        if !fields.contains_key(field) {
            return Err(FrontMatterError::MissingField((*field).to_string()));
        }
    }

    let license = fields["license"].trim();
    if license != REQUIRED_LICENSE {
        return Err(FrontMatterError::License(license.to_string()));
    }

    let mut warnings = Vec::new();
    let mut tags = Vec::new();
    match fields.get("tags") {
        Some(value) => {
            if value.contains(',') {
                return Err(FrontMatterError::TagFormat(value.clone()));
            }
            for tag in value.split_whitespace() {
                sink.ensure_tag(tag)?;
                tags.push(tag.to_string());
            }
        }
        None => warnings.push(format!(
            "{src_name}: no tags field — document will not appear in any tag index"
        )),
    }

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.extend(lines[..=open].iter().cloned());
    out.extend(interior.iter().cloned());
    if !fields.contains_key("layout") {
        out.push(format!("layout: {DEFAULT_LAYOUT}"));
    }
    out.push(format!("src: {src_name}"));
    out.extend(lines[close..].iter().cloned());

    Ok(Normalized {
        lines: out,
        warnings,
        title: fields.get("title").cloned(),
        tags,
    })
}
