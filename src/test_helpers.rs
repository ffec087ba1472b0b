//! Shared test utilities for the sourcedown test suite.
//!
//! Provides a canonical annotated article fixture and a small writer helper,
//! so conversion tests across modules exercise the same input shape.

use std::fs;
use std::path::{Path, PathBuf};

/// A complete, valid annotated article: front-matter doc comment, one
/// host-language statement, one embedded snippet block.
pub fn minimal_article() -> String {
    "\
/**
 * @title Sorting a vector
 * @author Jane Doe
 * @summary Shows std::sort on a numeric vector.
 * @license MIT
 * @tags stl basics
 *
 * Sorting needs nothing more than a call:
 */

std::sort(x.begin(), x.end());

/*** R
sort_demo()
*/
"
    .to_string()
}

/// Write an article file into `dir` and return its path.
pub fn write_article(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
