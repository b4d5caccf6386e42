//! Site root discovery

use crate::error::Result;
use crate::infrastructure::config::{DirectoryConfig, CONFIG_FILE};
use crate::infrastructure::FileSystemRepository;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding site root discovery
pub const ROOT_ENV: &str = "ANNUAIRE_ROOT";

/// A site root together with its loaded configuration
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub config: DirectoryConfig,
}

impl Site {
    /// Open the site at `root`, loading its directory.toml if present
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = DirectoryConfig::load_from_dir(&root)?;
        debug!(root = %root.display(), "opened site");
        Ok(Site { root, config })
    }

    /// Discover the site root.
    /// Checks ANNUAIRE_ROOT first, then walks up from the current directory
    /// looking for directory.toml, then settles on the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            return Self::open(PathBuf::from(root_path));
        }

        let current_dir = std::env::current_dir()?;
        Self::open(Self::discover_from(&current_dir))
    }

    /// Nearest ancestor of `start` (inclusive) holding directory.toml, or `start`
    pub fn discover_from(start: &Path) -> PathBuf {
        start
            .ancestors()
            .find(|dir| dir.join(CONFIG_FILE).is_file())
            .unwrap_or(start)
            .to_path_buf()
    }

    pub fn content_root(&self) -> PathBuf {
        self.root.join(&self.config.content_dir)
    }

    pub fn repository(&self) -> FileSystemRepository {
        FileSystemRepository::new(self.content_root()).with_extension(&self.config.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
        let subdir = temp.path().join("content").join("restaurants");
        fs::create_dir_all(&subdir).unwrap();

        assert_eq!(Site::discover_from(&subdir), temp.path());
    }

    #[test]
    fn test_discover_without_config_uses_start() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Site::discover_from(temp.path()), temp.path());
    }

    #[test]
    fn test_repository_uses_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "content_dir = \"pages\"\nextension = \"md\"\n",
        )
        .unwrap();

        let site = Site::open(temp.path().to_path_buf()).unwrap();
        let repo = site.repository();
        assert_eq!(repo.root, temp.path().join("pages"));
        assert_eq!(repo.extension, "md");
    }
}
