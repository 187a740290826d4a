/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `weave.toml` configuration file.
//!
//! All fields are optional. Values from the file sit between the built-in
//! defaults and command-line flags:
//!
//! ```toml
//! emit_boundaries = false
//! output_prefix = "t."
//! max_depth = 50
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use weave_template::ExpandOptions;

/// Name of the config file looked up next to the input document.
pub const CONFIG_FILE_NAME: &str = "weave.toml";

/// Contents of a `weave.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaveConfig {
    #[serde(default)]
    pub emit_boundaries: Option<bool>,

    #[serde(default)]
    pub output_prefix: Option<String>,

    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl WeaveConfig {
    /// Parse config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid weave configuration")
    }

    /// Load config from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Load `explicit` if given, otherwise `weave.toml` next to `input` if present.
    pub fn discover(explicit: Option<&Path>, input: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = default_config_path(input);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply the file's values on top of `options`.
    pub fn apply(&self, mut options: ExpandOptions) -> ExpandOptions {
        if let Some(emit) = self.emit_boundaries {
            options = options.with_boundaries(emit);
        }
        if let Some(prefix) = &self.output_prefix {
            options = options.with_output_prefix(prefix.clone());
        }
        if let Some(depth) = self.max_depth {
            options = options.with_max_depth(depth);
        }
        options
    }
}

fn default_config_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or(Path::new(""))
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_changes_nothing() {
        let config = WeaveConfig::from_toml("").unwrap();
        assert_eq!(config, WeaveConfig::default());
        assert_eq!(config.apply(ExpandOptions::default()), ExpandOptions::default());
    }

    #[test]
    fn test_full_config() {
        let config = WeaveConfig::from_toml(
            "emit_boundaries = false\noutput_prefix = \"flat.\"\nmax_depth = 7\n",
        )
        .unwrap();
        let options = config.apply(ExpandOptions::default());
        assert!(!options.emit_boundaries);
        assert_eq!(options.output_prefix, "flat.");
        assert_eq!(options.max_depth, 7);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(WeaveConfig::from_toml("emit_boundary = true\n").is_err());
    }

    #[test]
    fn test_discover_next_to_input() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "max_depth = 3\n").unwrap();

        let config = WeaveConfig::discover(None, &temp.path().join("index.html")).unwrap();
        assert_eq!(config.max_depth, Some(3));
    }

    #[test]
    fn test_discover_without_file() {
        let temp = TempDir::new().unwrap();
        let config = WeaveConfig::discover(None, &temp.path().join("index.html")).unwrap();
        assert_eq!(config, WeaveConfig::default());
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("custom.toml");
        assert!(WeaveConfig::discover(Some(&missing), Path::new("index.html")).is_err());
    }
}
