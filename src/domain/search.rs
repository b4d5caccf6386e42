//! Free-text and tag matching over documents

use crate::domain::ContentDocument;

/// Case-insensitive substring match against the document's title, summary
/// and tags joined by spaces.
///
/// # Examples
///
/// ```
/// use annuaire::domain::{search::matches_query, ContentDocument, Metadata};
///
/// let mut meta = Metadata::new();
/// meta.insert("title".into(), "Le Bistro".into());
/// let doc = ContentDocument::new("a/b/c/le-bistro".into(), String::new(), meta);
/// assert!(matches_query(&doc, "BISTRO"));
/// assert!(!matches_query(&doc, "brasserie"));
/// ```
pub fn matches_query(document: &ContentDocument, query: &str) -> bool {
    let term = query.to_lowercase();
    searchable_text(document).contains(&term)
}

fn searchable_text(document: &ContentDocument) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.extend(document.scalar_text("title"));
    parts.extend(document.scalar_text("summary"));
    parts.extend(document.tags().iter().cloned());
    parts.join(" ").to_lowercase()
}

/// Exact membership test against the document's `tags` list
pub fn matches_tag(document: &ContentDocument, tag: &str) -> bool {
    document.has_tag(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MetaValue, Metadata};

    fn doc(meta: &[(&str, MetaValue)]) -> ContentDocument {
        let metadata: Metadata = meta
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        ContentDocument::new("x".into(), String::new(), metadata)
    }

    #[test]
    fn test_matches_summary_and_tags() {
        let d = doc(&[
            ("title", "Le Bistro".into()),
            ("summary", "Cuisine du marché".into()),
            ("tags", vec!["paris".to_string(), "terrasse".to_string()].into()),
        ]);
        assert!(matches_query(&d, "marché"));
        assert!(matches_query(&d, "Terrasse"));
        assert!(!matches_query(&d, "lyon"));
    }

    #[test]
    fn test_fields_are_joined_with_spaces() {
        let d = doc(&[
            ("title", "Le Bistro".into()),
            ("tags", vec!["paris".to_string()].into()),
        ]);
        assert!(matches_query(&d, "bistro paris"));
    }

    #[test]
    fn test_name_is_not_searched() {
        let d = doc(&[("name", "Chez Marie".into())]);
        assert!(!matches_query(&d, "marie"));

        let d = doc(&[("name", "Chez Marie".into()), ("title", "Crêperie".into())]);
        assert!(matches_query(&d, "crêperie"));
        assert!(!matches_query(&d, "marie"));
    }

    #[test]
    fn test_numeric_title_is_searched_as_text() {
        let d = doc(&[("title", 1789.0.into())]);
        assert!(matches_query(&d, "1789"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query(&doc(&[]), ""));
    }

    #[test]
    fn test_tag_match_is_exact() {
        let d = doc(&[("tags", vec!["bistro".to_string()].into())]);
        assert!(matches_tag(&d, "bistro"));
        assert!(!matches_tag(&d, "bist"));
        assert!(!matches_tag(&d, "Bistro"));
    }
}
