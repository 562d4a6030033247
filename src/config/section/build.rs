//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"      # Markdown sources
//! posts = "posts"          # Post directory inside `content`
//! output = "public"        # Rendered site
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build paths and outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Content directory (relative to the config file).
    pub content: PathBuf,
    /// Post directory (relative to `content`).
    pub posts: PathBuf,
    /// Output directory (relative to the config file).
    pub output: PathBuf,
    /// Remove the output directory before building.
    #[serde(skip)]
    pub clean: bool,
    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            posts: "posts".into(),
            output: "public".into(),
            clean: false,
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildConfig {
    /// Absolute post directory (after path normalization).
    pub fn posts_dir(&self) -> PathBuf {
        self.content.join(&self.posts)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file (relative to output dir).
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}
