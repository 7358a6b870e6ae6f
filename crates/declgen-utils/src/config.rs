//! Configuration file handling for declgen runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the declgen.toml configuration file.
///
/// The file is optional; every key has a default, and command-line flags
/// override it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub docs: Docs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// Package name written into the generated file header.
    #[serde(default = "default_package")]
    pub package: String,
    /// Extension of generated output files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Docs {
    /// Emit documentation comment blocks.
    #[serde(default)]
    pub comments: bool,
    /// Convert HTML markup in descriptions to plain text.
    #[serde(default = "default_true", rename = "strip-markup")]
    pub strip_markup: bool,
}

fn default_package() -> String {
    "nodejs".to_string()
}

fn default_extension() -> String {
    "go".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Output {
    fn default() -> Self {
        Self {
            package: default_package(),
            extension: default_extension(),
        }
    }
}

impl Default for Docs {
    fn default() -> Self {
        Self {
            comments: false,
            strip_markup: true,
        }
    }
}

impl Config {
    /// Loads configuration from a declgen.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;

        toml::from_str(&contents).with_context(|| "Failed to parse declgen.toml")
    }

    /// Saves configuration to a declgen.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds a declgen.toml starting from the current directory and walking
    /// up. Returns `None` when no configuration file exists.
    ///
    /// # Errors
    /// Returns an error if a found file cannot be read or parsed.
    pub fn find() -> Result<Option<(Self, PathBuf)>> {
        let mut current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;

        loop {
            let config_path = current_dir.join("declgen.toml");
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok(Some((config, current_dir)));
            }

            if !current_dir.pop() {
                return Ok(None);
            }
        }
    }
}
