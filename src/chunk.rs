//! Chunk classification for annotated host-language sources.
//!
//! An article source file interleaves three kinds of content:
//!
//! ```text
//! /**                          ← documentation comment (prose + metadata)
//!  * @title Finding the minimum of a vector
//!  * @author ...
//!  */
//!
//! #include <header>            ← host-language code
//! double vecmin(Vector x) { ... }
//!
//! /*** R                       ← embedded-language snippet block
//! x <- sample(1:100, 10)
//! vecmin(x)
//! */
//! ```
//!
//! The classifier partitions the file's lines into an ordered sequence of
//! [`Chunk`]s, each tagged with its kind. Classification is purely
//! line-oriented: three regex patterns recognize the block open/close markers,
//! everything else is appended verbatim to the current chunk.
//!
//! ## State machine
//!
//! One explicit state (`Normal`, inside a doc comment, or inside an embedded
//! block) and one accumulator. Open markers are only legal in `Normal`; an
//! open marker inside an already-open block is malformed input and fails with
//! [`ChunkError::NestedBlock`] rather than guessing recovery semantics. A
//! close marker in `Normal` is not an error — it is literal host-code content.
//!
//! Chunks consisting only of blank lines are discarded, so a run of empty
//! lines between two comment blocks does not produce an empty code fence
//! downstream.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Block marker opened inside another comment block at line {line}")]
    NestedBlock { line: usize },
}

/// Content kind assigned to a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkKind {
    /// Host-language code, outside any comment block.
    HostCode,
    /// Prose/metadata lines from a documentation comment.
    Doc,
    /// An embedded-language snippet. `lang` is the lowercased letter token
    /// from the open marker (`/*** R` → `"r"`), used as the fence identifier.
    Embedded { lang: String },
}

/// A contiguous run of lines with a single content kind.
///
/// Marker lines themselves are consumed by the classifier and never appear
/// in a chunk's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: ChunkKind,
    pub lines: Vec<String>,
}

// Written with explicit ASCII classes so the patterns compile regardless of
// the regex crate's unicode feature set.
static EMBEDDED_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*/\*{3,}[ \t]+([A-Za-z])[ \t]*$").unwrap());
// A letterless star run (`/***`) also opens a doc comment; EMBEDDED_OPEN is
// tried first in classify, so a lettered marker still wins as embedded.
static DOC_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*/\*\*+[ \t]*$").unwrap());
static COMMENT_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*\*+/[ \t]*$").unwrap());

enum State {
    Normal,
    InDocComment,
    InEmbeddedBlock { lang: String },
}

/// Partition source lines into classified chunks.
pub fn classify(lines: &[String]) -> Result<Vec<Chunk>, ChunkError> {
    let mut chunks = Vec::new();
    let mut acc: Vec<String> = Vec::new();
    let mut state = State::Normal;

    for (idx, line) in lines.iter().enumerate() {
        if let Some(caps) = EMBEDDED_OPEN.captures(line) {
            if !matches!(state, State::Normal) {
                return Err(ChunkError::NestedBlock { line: idx + 1 });
            }
            flush(&mut chunks, &mut acc, ChunkKind::HostCode);
            state = State::InEmbeddedBlock {
                lang: caps[1].to_lowercase(),
            };
        } else if DOC_OPEN.is_match(line) {
            if !matches!(state, State::Normal) {
                return Err(ChunkError::NestedBlock { line: idx + 1 });
            }
            flush(&mut chunks, &mut acc, ChunkKind::HostCode);
            state = State::InDocComment;
        } else if COMMENT_CLOSE.is_match(line) {
            match std::mem::replace(&mut state, State::Normal) {
                State::InDocComment => flush(&mut chunks, &mut acc, ChunkKind::Doc),
                State::InEmbeddedBlock { lang } => {
                    flush(&mut chunks, &mut acc, ChunkKind::Embedded { lang });
                }
                // A lone close marker outside any block is literal content.
                State::Normal => acc.push(line.clone()),
            }
        } else {
            acc.push(line.clone());
        }
    }

    flush(&mut chunks, &mut acc, ChunkKind::HostCode);
    Ok(chunks)
}

/// Emit the accumulator as a chunk, unless it is blank-only.
fn flush(chunks: &mut Vec<Chunk>, acc: &mut Vec<String>, kind: ChunkKind) {
    let lines = std::mem::take(acc);
    if lines.iter().all(|l| l.trim().is_empty()) {
        return;
    }
    chunks.push(Chunk { kind, lines });
}
