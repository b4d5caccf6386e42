//! Initialize site use case

use crate::error::{AnnuaireError, Result};
use crate::infrastructure::config::{DirectoryConfig, CONFIG_FILE};
use std::fs;
use std::path::Path;
use tracing::info;

/// Creates a site skeleton: directory.toml plus an empty content directory
pub struct InitService;

impl InitService {
    /// Initialize a new site at the specified path.
    pub fn execute(path: &Path, name: Option<&str>) -> Result<DirectoryConfig> {
        if path.join(CONFIG_FILE).exists() {
            return Err(AnnuaireError::Config(format!(
                "Directory already initialized: {}",
                path.display()
            )));
        }

        let mut config = DirectoryConfig::default();
        if let Some(name) = name {
            config.name = name.to_string();
        }

        fs::create_dir_all(path.join(&config.content_dir))?;
        config.save_to_dir(path)?;

        info!(root = %path.display(), "initialized site");
        Ok(config)
    }
}
