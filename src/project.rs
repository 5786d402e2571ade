//! Workspace initialization (`--init`).

use crate::config::Config;
use crate::error::{AuditError, Result};
use std::fs;
use std::path::PathBuf;

const CONFIG_PLACEHOLDER: &str = "# AutoNIST-Audit Config\n";

/// Creates the working directories and the placeholder config file
pub struct ProjectInitializer<'a> {
    config: &'a Config,
}

impl<'a> ProjectInitializer<'a> {
    pub fn new(config: &'a Config) -> Self {
        ProjectInitializer { config }
    }

    /// Create `reports/`, `logs/`, `data/` and `exports/`, then (re)write the config file.
    ///
    /// Safe to run repeatedly. A failure part-way leaves earlier directories in place.
    pub fn initialize(&self) -> Result<Vec<PathBuf>> {
        let dirs = self.config.workspace_dirs();
        for dir in &dirs {
            fs::create_dir_all(dir).map_err(|e| AuditError::io(dir, e))?;
            tracing::debug!(dir = %dir.display(), "directory ready");
            println!("Created: {}/", dir.display());
        }

        let config_file = self.config.config_file();
        fs::write(&config_file, CONFIG_PLACEHOLDER)
            .map_err(|e| AuditError::io(&config_file, e))?;
        println!("Created: {}", config_file.display());

        println!("\n✅ Project initialized!");
        Ok(dirs)
    }
}
