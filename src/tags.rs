//! Tag index generation behind a filesystem port.
//!
//! Every tag named in a document's `tags:` field gets a directory under the
//! site's tag root with a small generated index page that the downstream site
//! renderer expands into a listing:
//!
//! ```text
//! tags/
//! ├── stl/
//! │   └── index.md          # layout: tag, title: stl, include directive
//! └── featured/
//!     └── index.md
//! ```
//!
//! Tag creation is the only filesystem side effect of front-matter
//! normalization, so it lives behind the [`TagSink`] trait rather than as
//! ambient `std::fs` calls. The converter takes a `&mut dyn TagSink`:
//! production code passes [`DiskTagSink`], tests and `check` mode pass
//! [`MemoryTagSink`] and never touch the disk.
//!
//! ## Idempotence
//!
//! `ensure_tag` is safe to call any number of times for the same tag.
//! Directory creation uses `create_dir_all` (existing directories are not an
//! error, which also tolerates concurrent invocations racing on creation),
//! and an existing index page is never overwritten — a site operator may have
//! customized it.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for tag index pages.
///
/// `ensure_tag` returns `true` if the tag page was created by this call,
/// `false` if it already existed.
pub trait TagSink {
    fn ensure_tag(&mut self, tag: &str) -> Result<bool, TagError>;
}

/// Render the generated index page for a tag.
///
/// A fixed template: layout, title, and an include directive that the site
/// renderer expands into the actual post listing.
pub fn tag_index_stub(tag: &str) -> String {
    format!("---\nlayout: tag\ntitle: {tag}\n---\n\n{{% include tag_page.html %}}\n")
}

/// Writes tag pages under a root directory (`<root>/<tag>/index.md`).
#[derive(Debug)]
pub struct DiskTagSink {
    root: PathBuf,
    /// Tags whose index page was created during this run, in creation order.
    pub created: Vec<String>,
}

impl DiskTagSink {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            created: Vec::new(),
        }
    }
}

impl TagSink for DiskTagSink {
    fn ensure_tag(&mut self, tag: &str) -> Result<bool, TagError> {
        let dir = self.root.join(tag);
        fs::create_dir_all(&dir)?;

        let index = dir.join("index.md");
        if index.exists() {
            return Ok(false);
        }
        fs::write(&index, tag_index_stub(tag))?;
        self.created.push(tag.to_string());
        Ok(true)
    }
}

/// Records tags without touching the filesystem. Used by `check` mode and tests.
#[derive(Debug, Default)]
pub struct MemoryTagSink {
    pub tags: BTreeSet<String>,
}

impl TagSink for MemoryTagSink {
    fn ensure_tag(&mut self, tag: &str) -> Result<bool, TagError> {
        Ok(self.tags.insert(tag.to_string()))
    }
}
