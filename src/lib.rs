//! # sourcedown
//!
//! Converts a corpus of annotated native source articles into a markdown
//! site. Each article is a self-contained source file whose documentation
//! comments carry the prose and metadata; sourcedown turns it into a
//! normalized post with validated front matter, fenced code blocks, and
//! generated tag index pages.
//!
//! # Architecture: One-Pass Pipeline
//!
//! A conversion is a linear, single-pass text transformation:
//!
//! ```text
//! 1. Classify    lines      →  chunks       (doc / host-code / embedded)
//! 2. Assemble    chunks     →  markdown     (fields, prose, code fences)
//! 3. Normalize   markdown   →  post         (front matter validated + amended)
//! ```
//!
//! Each step is a pure function over lines, so unit tests exercise pipeline
//! logic without touching the filesystem. The one side effect — tag index
//! generation — is isolated behind the [`tags::TagSink`] port, with a disk
//! implementation for builds and an in-memory one for tests and `check` mode.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`chunk`] | Line-oriented state machine partitioning a source file into classified chunks |
//! | [`markup`] | Doc-comment to markdown conversion and code fence wrapping |
//! | [`frontmatter`] | Front-matter extraction, validation, and normalization |
//! | [`convert`] | Orchestration: single-file conversion, batch build, manifest report |
//! | [`tags`] | Tag index page generation behind the `TagSink` filesystem port |
//! | [`config`] | `sourcedown.toml` loading, validation, stock config |
//! | [`output`] | CLI output formatting — information-first display of build results |
//!
//! # Design Decisions
//!
//! ## Fail-Fast Validation
//!
//! Every validation failure (missing front matter, missing required field,
//! wrong license, comma-separated tags, nested block markers) aborts the
//! document's conversion with a typed error. No partial output is usable by
//! the downstream site build, so there is nothing to recover to. The only
//! non-fatal finding is a missing `tags` field, which downgrades to a
//! warning.
//!
//! ## Structural State, Not Boolean Flags
//!
//! The chunk classifier models "inside a doc comment" and "inside an
//! embedded block" as variants of one state enum with a single accumulator,
//! so the illegal both-at-once state cannot be represented. An open marker
//! encountered inside another block is malformed input and fails loudly.
//!
//! ## Tag Generation as a Port
//!
//! Tag directories are the one place conversion touches the filesystem
//! outside its own output file. Routing that through the [`tags::TagSink`]
//! trait keeps the converter testable without real I/O and makes tag-page
//! creation idempotent in one place.

pub mod chunk;
pub mod config;
pub mod convert;
pub mod frontmatter;
pub mod markup;
pub mod output;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_helpers;
