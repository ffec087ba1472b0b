//! Document assembly and conversion — the pipeline's orchestration layer.
//!
//! A single conversion runs in three steps:
//!
//! ```text
//! classify (chunk)  →  assemble markdown (markup)  →  normalize (frontmatter)
//! ```
//!
//! Only files with a host-language extension are classified; anything else
//! (already-markdown input) skips straight to front-matter normalization.
//! Assembly emits the opening `---` delimiter, dispatches each chunk — doc
//! chunks through the per-line converter with the front-matter flag threaded
//! across them, code chunks into fenced blocks — and concatenates the results
//! in chunk order.
//!
//! [`build`] runs the whole corpus: every convertible file under the source
//! directory becomes `<posts>/<stem>.md`, with tag pages generated as a side
//! effect of normalization. A conversion failure stops the build and names
//! the offending file. `check` mode is the same walk with writes disabled and
//! an in-memory tag sink.

use crate::chunk::{self, ChunkError, ChunkKind};
use crate::config::SiteConfig;
use crate::frontmatter::{self, DELIMITER, FrontMatterError};
use crate::markup;
use crate::tags::TagSink;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions treated as host-language sources (classified before assembly).
pub const HOST_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx"];

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Front matter error: {0}")]
    FrontMatter(#[from] FrontMatterError),
    #[error("Chunk error: {0}")]
    Chunk(#[from] ChunkError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{path}: {source}")]
    Document {
        path: String,
        #[source]
        source: Box<ConvertError>,
    },
}

/// Outcome of one document conversion.
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    /// Input file base name (also the injected `src:` value).
    pub source: String,
    /// Output path written, if anything was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Outcome of a batch build, serialized as the manifest report.
#[derive(Debug, Default, Serialize)]
pub struct BuildResult {
    pub reports: Vec<ConvertReport>,
}

/// Assemble a classified host-language source into markdown lines.
pub fn assemble(lines: &[String], config: &SiteConfig) -> Result<Vec<String>, ChunkError> {
    let chunks = chunk::classify(lines)?;

    let mut out = vec![DELIMITER.to_string()];
    let mut front_matter_open = true;
    for chunk in &chunks {
        match &chunk.kind {
            ChunkKind::Doc => {
                let (converted, open) = markup::doc_chunk_to_markdown(&chunk.lines, front_matter_open);
                front_matter_open = open;
                out.extend(converted);
            }
            ChunkKind::HostCode => {
                out.extend(markup::fence_chunk(&chunk.lines, &config.highlight.host));
            }
            ChunkKind::Embedded { lang } => {
                out.extend(markup::fence_chunk(&chunk.lines, lang));
            }
        }
    }
    Ok(out)
}

/// Convert one document. Writes to `output` when given; `None` validates only.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &SiteConfig,
    sink: &mut dyn TagSink,
) -> Result<ConvertReport, ConvertError> {
    let raw = fs::read_to_string(input)?;
    let lines: Vec<String> = raw.lines().map(str::to_string).collect();

    let assembled = if is_host_source(input) {
        assemble(&lines, config)?
    } else {
        lines
    };

    let src_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let normalized = frontmatter::normalize(&assembled, &src_name, sink)?;

    if let Some(path) = output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, normalized.lines.join("\n") + "\n")?;
    }

    Ok(ConvertReport {
        source: src_name,
        output: output.map(|p| p.display().to_string()),
        title: normalized.title,
        tags: normalized.tags,
        warnings: normalized.warnings,
    })
}

/// Convert every article under the configured source directory.
///
/// Files are processed in sorted order so output and manifest are
/// deterministic. With `write` disabled nothing is written (check mode);
/// the tag sink still sees every tag so duplicates across documents are
/// exercised either way.
pub fn build(
    root: &Path,
    config: &SiteConfig,
    sink: &mut dyn TagSink,
    write: bool,
) -> Result<BuildResult, ConvertError> {
    let source_dir = root.join(&config.source);
    let posts_dir = root.join(&config.posts);

    let mut inputs: Vec<PathBuf> = WalkDir::new(&source_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.is_file() && is_convertible(p))
        .collect();
    inputs.sort();

    let mut result = BuildResult::default();
    for input in &inputs {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let output = posts_dir.join(format!("{stem}.md"));

        let report = convert_file(input, write.then_some(output.as_path()), config, sink)
            .map_err(|e| ConvertError::Document {
                path: input.display().to_string(),
                source: Box::new(e),
            })?;
        result.reports.push(report);
    }
    Ok(result)
}

/// Write the batch manifest report as pretty-printed JSON.
pub fn write_manifest(path: &Path, result: &BuildResult) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

fn is_host_source(path: &Path) -> bool {
    extension(path).is_some_and(|ext| HOST_EXTENSIONS.contains(&ext.as_str()))
}

fn is_convertible(path: &Path) -> bool {
    extension(path).is_some_and(|ext| ext == "md" || HOST_EXTENSIONS.contains(&ext.as_str()))
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}
