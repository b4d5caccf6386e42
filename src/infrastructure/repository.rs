//! File system content repository

use crate::domain::{front_matter, search, ContentDocument, ContentPath};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default content file extension
pub const DEFAULT_EXTENSION: &str = "mdx";

/// Read-only queries over a category/region/city/listing content tree.
///
/// Absent nodes are never errors: lookups return empty collections or
/// `None`.
pub trait ContentRepository {
    /// Every document at any depth, in traversal order
    fn list_all(&self) -> Vec<ContentDocument>;

    /// Document by exact `/`-joined path
    fn get(&self, path: &str) -> Option<ContentDocument>;

    /// Case-insensitive match over title, summary and tags
    fn search(&self, query: &str) -> Vec<ContentDocument> {
        self.list_all()
            .into_iter()
            .filter(|doc| search::matches_query(doc, query))
            .collect()
    }

    /// Documents whose `tags` contain `tag` exactly
    fn by_tag(&self, tag: &str) -> Vec<ContentDocument> {
        self.list_all()
            .into_iter()
            .filter(|doc| search::matches_tag(doc, tag))
            .collect()
    }

    fn categories(&self) -> Vec<String>;

    fn regions(&self, category: &str) -> Vec<String>;

    fn cities(&self, category: &str, region: &str) -> Vec<String>;

    /// Listing ids (file stems) under a city
    fn listing_ids(&self, category: &str, region: &str, city: &str) -> Vec<String>;

    fn listings(&self, category: &str, region: &str, city: &str) -> Vec<ContentDocument> {
        self.listing_ids(category, region, city)
            .iter()
            .filter_map(|id| self.listing(category, region, city, id))
            .collect()
    }

    fn listing(
        &self,
        category: &str,
        region: &str,
        city: &str,
        listing_id: &str,
    ) -> Option<ContentDocument>;
}

/// File system implementation of ContentRepository
///
/// Stateless: every call rescans the disk.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    pub extension: String,
}

impl FileSystemRepository {
    /// Create a repository over `root` using the default extension
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository {
            root,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    fn is_hidden(name: &str) -> bool {
        name.starts_with('.')
    }

    fn has_content_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// `root/segments...` when every step is a real directory. Symlinks are
    /// not followed, matching the tree walk in `list_all`.
    fn real_dir(&self, segments: &[String]) -> Option<PathBuf> {
        let mut dir = self.root.clone();
        for segment in segments {
            dir.push(segment);
            if !is_real_dir(&dir) {
                return None;
            }
        }
        Some(dir)
    }

    /// Names of visible subdirectories of `root/segments...`
    fn child_dirs(&self, segments: &[&str]) -> Vec<String> {
        let dir = if segments.is_empty() {
            Some(self.root.clone())
        } else {
            match ContentPath::from_segments(segments) {
                Some(path) => self.real_dir(path.segments()),
                None => {
                    debug!(?segments, "rejecting invalid taxonomy segment");
                    return Vec::new();
                }
            }
        };
        let Some(dir) = dir else {
            return Vec::new();
        };

        self.read_dir_entries(&dir)
            .into_iter()
            .filter(|(_, path)| is_real_dir(path))
            .map(|(name, _)| name)
            .collect()
    }

    /// Visible entries of `dir`, empty when it does not exist
    fn read_dir_entries(&self, dir: &Path) -> Vec<(String, PathBuf)> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(dir = %dir.display(), error = %e, "cannot read directory");
                }
                return Vec::new();
            }
        };

        let mut result = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if Self::is_hidden(&name) {
                continue;
            }
            result.push((name, entry.path()));
        }
        result
    }

    /// Read and parse one document, giving it `path` as identifier
    fn load(&self, file: &Path, path: &ContentPath) -> Option<ContentDocument> {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(file = %file.display(), error = %e, "skipping unreadable document");
                }
                return None;
            }
        };

        let (metadata, body) = front_matter::parse(&source);
        Some(ContentDocument::new(path.to_string(), body, metadata))
    }

    fn load_path(&self, path: &ContentPath) -> Option<ContentDocument> {
        let (parents, leaf) = path.split_leaf();
        let file = self
            .real_dir(parents)?
            .join(format!("{}.{}", leaf, self.extension));
        if !is_real_file(&file) {
            return None;
        }
        self.load(&file, path)
    }
}

fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
}

fn is_real_file(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.is_file())
}

impl ContentRepository for FileSystemRepository {
    fn list_all(&self) -> Vec<ContentDocument> {
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "content root missing");
            return Vec::new();
        }

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| !Self::is_hidden(name))
        });

        let mut documents = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.has_content_extension(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(path) = ContentPath::from_relative_file(rel) else {
                debug!(file = %entry.path().display(), "skipping file with unusable name");
                continue;
            };
            if let Some(document) = self.load(entry.path(), &path) {
                documents.push(document);
            }
        }

        debug!(count = documents.len(), "scanned content tree");
        documents
    }

    fn get(&self, path: &str) -> Option<ContentDocument> {
        let path = ContentPath::parse(path)?;
        self.load_path(&path)
    }

    fn categories(&self) -> Vec<String> {
        self.child_dirs(&[])
    }

    fn regions(&self, category: &str) -> Vec<String> {
        self.child_dirs(&[category])
    }

    fn cities(&self, category: &str, region: &str) -> Vec<String> {
        self.child_dirs(&[category, region])
    }

    fn listing_ids(&self, category: &str, region: &str, city: &str) -> Vec<String> {
        let Some(city_path) = ContentPath::from_segments([category, region, city]) else {
            return Vec::new();
        };

        let Some(dir) = self.real_dir(city_path.segments()) else {
            return Vec::new();
        };

        self.read_dir_entries(&dir)
            .into_iter()
            .filter(|(_, path)| is_real_file(path) && self.has_content_extension(path))
            .filter_map(|(_, path)| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect()
    }

    fn listing(
        &self,
        category: &str,
        region: &str,
        city: &str,
        listing_id: &str,
    ) -> Option<ContentDocument> {
        let path = ContentPath::from_segments([category, region, city, listing_id])?;
        self.load_path(&path)
    }
}
