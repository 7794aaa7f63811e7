//! Search configuration via `docsearch.toml`
//!
//! A single optional config file controls where documents come from and how
//! the engine weighs them. Every setting has a default, so a missing file or
//! an empty one behaves exactly like the defaults below.

use docsearch_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "docsearch.toml";

/// Ranking parameters handed to the text-search engine.
///
/// Persisted in `docsearch.toml` under the `[ranking]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingConfig {
    /// BM25 term saturation
    pub k1: f32,
    /// BM25 length normalization, in `[0, 1]`
    pub b: f32,
    /// Score multiplier for matches in the page title
    pub title_boost: f32,
    /// Score multiplier for matches in the page body
    pub content_boost: f32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            k1: 1.2,
            b: 0.75,
            title_boost: 5.0,
            content_boost: 1.0,
        }
    }
}

impl RankingConfig {
    /// Reject values the engine cannot rank with.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(Error::Config(format!(
                "ranking.k1 must be a non-negative number, got {}",
                self.k1
            )));
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(Error::Config(format!(
                "ranking.b must be between 0 and 1, got {}",
                self.b
            )));
        }
        for (name, boost) in [
            ("title_boost", self.title_boost),
            ("content_boost", self.content_boost),
        ] {
            if !boost.is_finite() || boost <= 0.0 {
                return Err(Error::Config(format!(
                    "ranking.{} must be greater than 0, got {}",
                    name, boost
                )));
            }
        }
        Ok(())
    }
}

/// Configuration loaded from `docsearch.toml`.
///
/// # Example
///
/// ```toml
/// # corpus = "docs.json"
///
/// [ranking]
/// title_boost = 5.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocsearchConfig {
    /// JSON corpus file; the bundled site pages are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,
    /// Ranking parameters.
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl DocsearchConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# docsearch configuration
#
# JSON corpus: an array of {"title", "url", "content"} objects.
# Titles must be unique. When unset, the bundled site pages are indexed.
# corpus = "docs.json"

[ranking]
# BM25 term saturation (default: 1.2)
k1 = 1.2
# BM25 length normalization, 0 = none, 1 = full (default: 0.75)
b = 0.75
# Score multiplier for matches in a page title (default: 5.0)
title_boost = 5.0
# Score multiplier for matches in page content (default: 1.0)
content_boost = 1.0
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or a value is invalid.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DocsearchConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.ranking.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// A relative `corpus` path is resolved against the config file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config = Self::from_toml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{} ({})", msg, path.display())),
            other => other,
        })?;
        if let (Some(corpus), Some(dir)) = (config.corpus.as_ref(), path.parent()) {
            if corpus.is_relative() {
                config.corpus = Some(dir.join(corpus));
            }
        }
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(true)` if the file was created, `Ok(false)` if it already
    /// existed.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::Config(format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
