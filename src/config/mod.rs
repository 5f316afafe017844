//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the metrics report, relative to the working directory.
    pub report: PathBuf,
    /// Substring a class name must contain to be considered.
    pub namespace: String,
    /// Maximum number of candidates printed.
    pub limit: usize,
    /// Selection thresholds.
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: PathBuf::from("public/report/report.json"),
            namespace: "Modules\\Common".to_string(),
            limit: 10,
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist. Use this for explicit `--config` flags.
    /// Env vars with `SIFT_` prefix override file values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(path))
            .merge(Env::prefixed("SIFT_").split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Load configuration from directory, looking for sift.toml or .sift/sift.toml.
    ///
    /// Missing files are silently skipped (defaults are used).
    pub fn load_default(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(dir.join("sift.toml")))
            .merge(Toml::file(dir.join(".sift/sift.toml")))
            .merge(Env::prefixed("SIFT_").split("__"))
            .extract()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Namespace as shown to humans, with `\` separators turned into `/`.
    pub fn display_namespace(&self) -> String {
        self.namespace.replace('\\', "/")
    }
}

/// Thresholds that make a class a refactoring candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// A class is a candidate when its cyclomatic complexity exceeds this.
    pub ccn: u32,
    /// A class is a candidate when its maintainability index is below this.
    pub mi: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { ccn: 4, mi: 85.0 }
    }
}
