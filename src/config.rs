//! Site configuration module.
//!
//! Handles loading and validating `sourcedown.toml` from the site root. All
//! options are optional — defaults match the conventional layout of a
//! Jekyll-style article site:
//!
//! ```toml
//! source = "src"       # Annotated source articles
//! posts = "_posts"     # Converted markdown output
//! tags = "tags"        # Generated tag index pages
//!
//! [highlight]
//! host = "cpp"         # Fence identifier for host-language code chunks
//! ```
//!
//! Embedded snippet chunks need no configuration: their fence identifier is
//! derived from the letter token on the block's open marker (`/*** R` → `r`).
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file name, looked up in the site root.
pub const CONFIG_FILE: &str = "sourcedown.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `sourcedown.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory of annotated source articles, relative to the site root.
    pub source: String,
    /// Directory converted markdown posts are written to.
    pub posts: String,
    /// Directory tag index pages are generated under.
    pub tags: String,
    /// Syntax-highlighting identifiers for fenced code blocks.
    pub highlight: HighlightConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    /// Fence identifier for host-language code chunks.
    pub host: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: "src".to_string(),
            posts: "_posts".to_string(),
            tags: "tags".to_string(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            host: "cpp".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("source", &self.source),
            ("posts", &self.posts),
            ("tags", &self.tags),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "'{name}' must not be empty"
                )));
            }
        }
        if self.highlight.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "'highlight.host' must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load `sourcedown.toml` from the site root, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A stock config file with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# sourcedown configuration — all options are optional, defaults shown.

# Directory of annotated source articles, relative to the site root.
source = "src"

# Directory converted markdown posts are written to.
posts = "_posts"

# Directory tag index pages are generated under.
tags = "tags"

[highlight]
# Fence identifier for host-language code chunks. Embedded snippet chunks
# derive theirs from the letter on the block marker (`/*** R` -> `r`).
host = "cpp"
"#
    .to_string()
}
