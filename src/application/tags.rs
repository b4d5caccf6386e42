//! Tag index use case

use crate::infrastructure::ContentRepository;
use std::collections::BTreeMap;

/// Distinct tags with the number of documents carrying each
pub struct TagIndex;

impl TagIndex {
    pub fn build<R: ContentRepository + ?Sized>(repository: &R) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for document in repository.list_all() {
            // A tag repeated in one document counts once
            let mut tags: Vec<&String> = document.tags().iter().collect();
            tags.sort();
            tags.dedup();
            for tag in tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemRepository;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_counts_documents_per_tag() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("r/IDF/Paris");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a.mdx"), "---\ntags: [bistro, paris, paris]\n---\n").unwrap();
        fs::write(dir.join("b.mdx"), "---\ntags: [paris]\n---\n").unwrap();
        fs::write(dir.join("c.mdx"), "no front-matter").unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let index = TagIndex::build(&repo);

        assert_eq!(index.len(), 2);
        assert_eq!(index["bistro"], 1);
        assert_eq!(index["paris"], 2);
    }
}
