//! TOML configuration for the `jangbu` binary.
//!
//! ```toml
//! content_path = "content/posts"
//! bind = "127.0.0.1:8787"
//!
//! [search]
//! threshold = 0.4
//! title_weight = 0.4
//! ```
//!
//! Every key is optional; omitted keys fall back to the defaults below.

use std::path::{Path, PathBuf};

use jangbu_core::{Error, Result};
use jangbu_search::SearchConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogConfig {
    /// Directory holding the markdown posts.
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,

    /// Address the API server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Search tuning.
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_content_path() -> PathBuf {
    PathBuf::from("content/posts")
}

fn default_bind() -> String {
    "127.0.0.1:8787".to_string()
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_path: default_content_path(),
            bind: default_bind(),
            search: SearchConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a TOML file, or defaults when `path` is
    /// `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }
}

// ============================================================================
// Tests
// ============================================================================
