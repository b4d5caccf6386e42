//! Content paths: the `/`-joined identifiers documents are addressed by
//!
//! The same joining rule applies whether a path comes from walking the
//! content tree or from caller-supplied taxonomy segments, so both kinds of
//! lookup produce identical `path` values.

use std::path::{Component, Path};

/// A validated, `/`-joined content path (no extension)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentPath {
    segments: Vec<String>,
}

impl ContentPath {
    /// Build from taxonomy segments, rejecting any that cannot name a node
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        if segments.is_empty() || !segments.iter().all(|s| is_valid_segment(s)) {
            return None;
        }

        Some(ContentPath { segments })
    }

    /// Parse a `/`-joined path; leading and trailing slashes are tolerated
    pub fn parse(path: &str) -> Option<Self> {
        Self::from_segments(path.trim_matches('/').split('/'))
    }

    /// Build from a file path relative to the content root, dropping the
    /// file extension of the last component
    pub fn from_relative_file(rel: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in rel.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str()?.to_string()),
                _ => return None,
            }
        }

        let last = segments.pop()?;
        let stem = Path::new(&last).file_stem()?.to_str()?.to_string();
        segments.push(stem);

        Self::from_segments(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Parent segments and the last segment
    pub fn split_leaf(&self) -> (&[String], &str) {
        let (leaf, parents) = self
            .segments
            .split_last()
            .map(|(leaf, parents)| (leaf.as_str(), parents))
            .unwrap_or(("", &[]));
        (parents, leaf)
    }
}

impl std::fmt::Display for ContentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// A segment names a taxonomy node only if it stays inside its parent and
/// is not hidden. Hidden entries are never listed, so they never resolve.
pub fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains('/')
        && !segment.contains('\\')
        && !segment.contains('\0')
}
