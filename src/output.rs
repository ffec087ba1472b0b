//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: each converted document
//! is displayed by positional index and title, with the source file and any
//! findings as indented context lines:
//!
//! ```text
//! Posts
//! 001 Finding the minimum of a vector
//!     Source: 2012-12-21-vector-minimum.cpp
//!     Tags: stl featured
//! 002 Sorting a vector
//!     Source: 2013-01-31-sorting.cpp
//!     Warning: 2013-01-31-sorting.cpp: no tags field — ...
//!
//! Tag pages
//!     stl featured
//!
//! Converted 2 posts, 2 tag pages
//! ```
//!
//! Each `format_*` function returns `Vec<String>` and is pure — no I/O — so
//! tests can assert on display output directly; `print_*` wrappers write to
//! stdout.

use crate::convert::{BuildResult, ConvertReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format one converted document: header plus indented context lines.
fn format_report(index: usize, report: &ConvertReport) -> Vec<String> {
    let title = report.title.as_deref().unwrap_or(&report.source);
    let mut lines = vec![format!("{} {}", format_index(index), title)];
    lines.push(format!("    Source: {}", report.source));
    if !report.tags.is_empty() {
        lines.push(format!("    Tags: {}", report.tags.join(" ")));
    }
    for warning in &report.warnings {
        lines.push(format!("    Warning: {warning}"));
    }
    lines
}

/// Format a full build: post listing, created tag pages, summary line.
pub fn format_build_output(result: &BuildResult, created_tags: &[String]) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (pos, report) in result.reports.iter().enumerate() {
        lines.extend(format_report(pos + 1, report));
    }

    if !created_tags.is_empty() {
        lines.push(String::new());
        lines.push("Tag pages".to_string());
        lines.push(format!("    {}", created_tags.join(" ")));
    }

    lines.push(String::new());
    lines.push(format!(
        "Converted {} {}, {} tag {}",
        result.reports.len(),
        plural(result.reports.len(), "post", "posts"),
        created_tags.len(),
        plural(created_tags.len(), "page", "pages"),
    ));
    lines
}

/// Format a single-file conversion.
pub fn format_convert_output(report: &ConvertReport) -> Vec<String> {
    let mut lines = format_report(1, report);
    if let Some(output) = &report.output {
        lines.push(format!("    Output: {output}"));
    }
    lines
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

pub fn print_build_output(result: &BuildResult, created_tags: &[String]) {
    for line in format_build_output(result, created_tags) {
        println!("{line}");
    }
}

pub fn print_convert_output(report: &ConvertReport) {
    for line in format_convert_output(report) {
        println!("{line}");
    }
}
