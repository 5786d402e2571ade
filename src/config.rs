use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace layout used by the initializer and the report writer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    /// Placeholder config file written by `--init`
    pub config_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Paths {
    /// Directory everything else is resolved against. Empty means the current directory.
    pub root: PathBuf,
    pub reports_dir: String,
    pub logs_dir: String,
    pub data_dir: String,
    pub exports_dir: String,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            root: PathBuf::new(),
            reports_dir: "reports".to_string(),
            logs_dir: "logs".to_string(),
            data_dir: "data".to_string(),
            exports_dir: "exports".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: Paths::default(),
            config_file: "config.yaml".to_string(),
        }
    }
}

impl Config {
    /// Load the layout from a TOML file, or fall back to the defaults.
    ///
    /// Unlike the workspace itself, nothing is created here: a missing file is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = config_path else {
            return Ok(Config::default());
        };

        let content = fs::read_to_string(config_path).map_err(|source| AuditError::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| AuditError::ConfigParse {
            path: config_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Replace the root directory, keeping the directory names.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.paths.root = root.into();
        self
    }

    /// Directory that receives audit reports
    pub fn reports_dir(&self) -> PathBuf {
        self.paths.root.join(&self.paths.reports_dir)
    }

    /// All working directories, in creation order.
    pub fn workspace_dirs(&self) -> Vec<PathBuf> {
        [
            &self.paths.reports_dir,
            &self.paths.logs_dir,
            &self.paths.data_dir,
            &self.paths.exports_dir,
        ]
        .into_iter()
        .map(|name| self.paths.root.join(name))
        .collect()
    }

    pub fn config_file(&self) -> PathBuf {
        self.paths.root.join(&self.config_file)
    }
}
