//! Doc-comment to markdown conversion and code fence wrapping.
//!
//! Documentation chunks carry both the article's metadata and its prose, in
//! comment-continuation form:
//!
//! ```text
//!  * @title Finding the minimum of a vector     → title: Finding the minimum...
//!  * @summary Demonstrates min_element.         → summary: Demonstrates...
//!  *   wrapped onto a second line               →   wrapped onto a second line
//!  *                                            → (closes front matter)
//!  * Body prose starts here.                    → Body prose starts here.
//! ```
//!
//! The first documentation chunk of an article doubles as its front matter:
//! keyword lines (`@word rest`) become `word: rest` metadata fields until a
//! body line closes the block. The only state is one boolean — is front
//! matter still open — threaded through [`doc_chunk_to_markdown`] so the
//! assembler can span it across chunks (only the first doc chunk ever sees
//! it set). Single forward pass, no backtracking.
//!
//! ## Line handling
//!
//! Three patterns are tried in order:
//!
//! 1. **Keyword** `* @word rest` (an optional colon after the word is
//!    tolerated, so `@license: MIT` and `@license MIT` are equivalent) —
//!    emitted as `word: rest`. After front matter closes these become plain
//!    body text, not metadata.
//! 2. **Content** `*<indent><text>` — the indent width (counted in
//!    characters, spaces or tabs) decides: more than one while front matter
//!    is open means a continuation of the previous field (re-indented two
//!    spaces); a single character closes front matter and starts the body.
//!    After close, indentation beyond the standard single character is
//!    preserved so nested markdown survives.
//! 3. Anything else — closes front matter if open (contributing no body
//!    text), otherwise a blank output line.

use crate::frontmatter::DELIMITER;
use regex::Regex;
use std::sync::LazyLock;

static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*[ \t]*@([A-Za-z0-9_]+):?[ \t]+(.*)$").unwrap());
static CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\*([ \t]+)([^ \t].*)$").unwrap());

/// Convert one documentation chunk into markdown lines.
///
/// `front_matter_open` is true only while the article's front matter block is
/// still being collected. Returns the output lines and the updated flag;
/// the closing `---` delimiter is emitted at the transition (or as the final
/// line if the chunk ends with front matter still open).
pub fn doc_chunk_to_markdown(lines: &[String], front_matter_open: bool) -> (Vec<String>, bool) {
    let mut out = Vec::with_capacity(lines.len() + 1);
    let mut open = front_matter_open;

    for line in lines {
        if let Some(caps) = KEYWORD.captures(line) {
            out.push(format!("{}: {}", &caps[1], caps[2].trim_end()));
        } else if let Some(caps) = CONTENT.captures(line) {
            let indent = &caps[1];
            let text = caps[2].trim_end();
            if open {
                if indent.len() > 1 {
                    out.push(format!("  {text}"));
                } else {
                    out.push(DELIMITER.to_string());
                    out.push(text.to_string());
                    open = false;
                }
            } else {
                // Keep indentation beyond the standard single space.
                out.push(format!("{}{}", &indent[1..], text));
            }
        } else if open {
            out.push(DELIMITER.to_string());
            open = false;
        } else {
            out.push(String::new());
        }
    }

    if open {
        out.push(DELIMITER.to_string());
        open = false;
    }
    (out, open)
}

/// Wrap a code chunk in a fenced block tagged with a language identifier.
///
/// Leading and trailing blank lines are trimmed first; interior blank lines
/// are preserved.
pub fn fence_chunk(lines: &[String], lang: &str) -> Vec<String> {
    let body = trim_blank_edges(lines);
    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(format!("```{lang}"));
    out.extend(body.iter().map(|l| l.to_string()));
    out.push("```".to_string());
    out
}

fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // =========================================================================
    // doc_chunk_to_markdown — front matter open
    // =========================================================================

    #[test]
    fn keywords_become_fields() {
        let (out, open) = doc_chunk_to_markdown(
            &lines(&[" * @title Vector minimum", " * @author Jane Doe"]),
            true,
        );
        assert_eq!(out, vec!["title: Vector minimum", "author: Jane Doe", "---"]);
        assert!(!open);
    }

    #[test]
    fn keyword_with_colon_form_is_tolerated() {
        let (out, _) = doc_chunk_to_markdown(&lines(&[" * @license: MIT"]), true);
        assert_eq!(out[0], "license: MIT");
    }

    #[test]
    fn deep_indent_is_a_field_continuation() {
        let (out, _) = doc_chunk_to_markdown(
            &lines(&[" * @summary Shows how min_element", " *   finds the smallest value"]),
            true,
        );
        assert_eq!(
            out,
            vec![
                "summary: Shows how min_element",
                "  finds the smallest value",
                "---"
            ]
        );
    }

    #[test]
    fn tab_indented_continuation_is_a_field_continuation() {
        let (out, _) = doc_chunk_to_markdown(
            &lines(&[" * @summary Shows how min_element", " *\t\tfinds the smallest value"]),
            true,
        );
        assert_eq!(
            out,
            vec![
                "summary: Shows how min_element",
                "  finds the smallest value",
                "---"
            ]
        );
    }

    #[test]
    fn single_space_indent_closes_front_matter_and_starts_body() {
        let (out, open) = doc_chunk_to_markdown(
            &lines(&[" * @title X", " * Body prose starts here."]),
            true,
        );
        assert_eq!(out, vec!["title: X", "---", "Body prose starts here."]);
        assert!(!open);
    }

    #[test]
    fn blank_comment_line_closes_front_matter_without_body() {
        let (out, open) = doc_chunk_to_markdown(&lines(&[" * @title X", " *"]), true);
        assert_eq!(out, vec!["title: X", "---"]);
        assert!(!open);
    }

    #[test]
    fn exhausted_chunk_emits_closing_delimiter() {
        let (out, open) = doc_chunk_to_markdown(&lines(&[" * @title X"]), true);
        assert_eq!(out.last().map(String::as_str), Some("---"));
        assert!(!open);
    }

    // =========================================================================
    // doc_chunk_to_markdown — front matter closed
    // =========================================================================

    #[test]
    fn keywords_after_close_are_plain_text() {
        let (out, _) = doc_chunk_to_markdown(&lines(&[" * @note still converted"]), false);
        assert_eq!(out, vec!["note: still converted"]);
    }

    #[test]
    fn content_after_close_keeps_extra_indent() {
        let (out, _) = doc_chunk_to_markdown(
            &lines(&[" * - item", " *   - nested item"]),
            false,
        );
        assert_eq!(out, vec!["- item", "  - nested item"]);
    }

    #[test]
    fn unmatched_lines_after_close_are_blank() {
        let (out, _) = doc_chunk_to_markdown(&lines(&[" * one", " *", " * two"]), false);
        assert_eq!(out, vec!["one", "", "two"]);
    }

    #[test]
    fn closed_chunk_never_reopens() {
        let (out, open) = doc_chunk_to_markdown(&lines(&[" * prose"]), false);
        assert_eq!(out, vec!["prose"]);
        assert!(!open);
    }

    // =========================================================================
    // fence_chunk
    // =========================================================================

    #[test]
    fn fence_wraps_with_language() {
        let out = fence_chunk(&lines(&["int f();"]), "cpp");
        assert_eq!(out, vec!["```cpp", "int f();", "```"]);
    }

    #[test]
    fn fence_trims_blank_edges() {
        let out = fence_chunk(&lines(&["", "  ", "x <- 1", "", "y <- 2", ""]), "r");
        assert_eq!(out, vec!["```r", "x <- 1", "", "y <- 2", "```"]);
    }

    #[test]
    fn fence_of_blank_only_chunk_is_empty_body() {
        // The classifier discards blank-only chunks, but fence_chunk stays total.
        let out = fence_chunk(&lines(&["", ""]), "cpp");
        assert_eq!(out, vec!["```cpp", "```"]);
    }
}
