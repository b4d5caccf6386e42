//! Configuration management

use crate::domain::pagination::DEFAULT_PAGE_SIZE;
use crate::error::{AnnuaireError, Result};
use crate::infrastructure::repository::DEFAULT_EXTENSION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "directory.toml";

/// Optional site features consumers may toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub tags: bool,
    pub search: bool,
    pub pagination: bool,
    pub images: bool,
    pub audio: bool,
}

impl Default for Features {
    fn default() -> Self {
        Features {
            tags: true,
            search: true,
            pagination: true,
            images: true,
            audio: true,
        }
    }
}

/// Directory site configuration, loaded once and passed to whatever needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub name: String,
    pub description: String,
    /// Content root, relative to the site root
    pub content_dir: String,
    pub extension: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<usize>,
    pub features: Features,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            name: "Directory Boilerplate".to_string(),
            description: "A customizable directory template".to_string(),
            content_dir: "content".to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            items_per_page: None,
            features: Features::default(),
        }
    }
}

impl DirectoryConfig {
    /// Load config from directory.toml in the given directory; defaults when absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DirectoryConfig::default());
            }
            Err(e) => return Err(AnnuaireError::Io(e)),
        };

        let config: DirectoryConfig = toml::from_str(&contents)
            .map_err(|e| AnnuaireError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to directory.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == Some(0) {
            return Err(AnnuaireError::Config(
                "items_per_page must be greater than 0".to_string(),
            ));
        }
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(AnnuaireError::Config(
                "extension must not be empty".to_string(),
            ));
        }
        if self.content_dir.is_empty() {
            return Err(AnnuaireError::Config(
                "content_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured page size, or the default
    pub fn page_size(&self) -> usize {
        self.items_per_page.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Look up a config value by key for display
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "content_dir" => self.content_dir.clone(),
            "extension" => self.extension.clone(),
            "items_per_page" => self.page_size().to_string(),
            "features.tags" => self.features.tags.to_string(),
            "features.search" => self.features.search.to_string(),
            "features.pagination" => self.features.pagination.to_string(),
            "features.images" => self.features.images.to_string(),
            "features.audio" => self.features.audio.to_string(),
            _ => {
                return Err(AnnuaireError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        };
        Ok(value)
    }
}
