//! Listing browser filter: free-text query plus an optional type set

use crate::domain::ContentDocument;
use std::collections::BTreeSet;

/// Filter applied by the listing browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    pub types: BTreeSet<String>,
}

impl ListingFilter {
    pub fn new(query: impl Into<String>) -> Self {
        ListingFilter {
            query: query.into(),
            types: BTreeSet::new(),
        }
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Query matches name/type/address/services/equipment, and the type
    /// set (when non-empty) contains the document's `type`
    pub fn matches(&self, document: &ContentDocument) -> bool {
        self.matches_query(document) && self.matches_type(document)
    }

    fn matches_query(&self, document: &ContentDocument) -> bool {
        if self.query.is_empty() {
            return true;
        }
        searchable_text(document).contains(&self.query.to_lowercase())
    }

    fn matches_type(&self, document: &ContentDocument) -> bool {
        self.types.is_empty()
            || document
                .scalar_text("type")
                .is_some_and(|kind| self.types.contains(&kind))
    }

    /// Keep matching documents in their original order
    pub fn apply(&self, documents: Vec<ContentDocument>) -> Vec<ContentDocument> {
        documents.into_iter().filter(|d| self.matches(d)).collect()
    }
}

fn searchable_text(document: &ContentDocument) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.extend(document.scalar_text("name"));
    parts.extend(document.scalar_text("type"));
    parts.extend(document.scalar_text("full_address"));
    parts.extend(document.string_list("services").iter().cloned());
    parts.extend(document.string_list("equipment").iter().cloned());
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Distinct non-empty `type` values in discovery order
pub fn distinct_types(documents: &[ContentDocument]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    documents
        .iter()
        .filter_map(|doc| doc.scalar_text("type"))
        .filter(|kind| !kind.is_empty())
        .filter(|kind| seen.insert(kind.clone()))
        .collect()
}
