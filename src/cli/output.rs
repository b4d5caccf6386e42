//! Output formatting utilities

use crate::application::{BrowseResult, Route};
use crate::domain::{ContentDocument, MetaValue};
use std::collections::BTreeMap;

/// Format taxonomy labels, one per line
pub fn format_names(names: &[String], empty: &str) -> String {
    if names.is_empty() {
        return empty.to_string();
    }

    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }
    output
}

/// Format documents as `path  title` lines
pub fn format_document_list(documents: &[ContentDocument]) -> String {
    if documents.is_empty() {
        return "No documents found".to_string();
    }

    let mut output = String::new();
    for doc in documents {
        match doc.title() {
            Some(title) => output.push_str(&format!("{}  {}\n", doc.path, title)),
            None => output.push_str(&format!("{}\n", doc.path)),
        }
    }
    output
}

fn format_value(value: &MetaValue) -> String {
    match value {
        MetaValue::Text(s) => s.clone(),
        MetaValue::Number(n) => n.to_string(),
        MetaValue::List(items) => items.join(", "),
    }
}

/// Format a single document: metadata block, blank line, body
pub fn format_document(document: &ContentDocument, plain: bool) -> String {
    let mut output = format!("path: {}\n", document.path);
    for (key, value) in &document.metadata {
        output.push_str(&format!("{}: {}\n", key, format_value(value)));
    }
    output.push('\n');

    if plain {
        output.push_str(&document.plain_text());
        output.push('\n');
    } else {
        output.push_str(&document.body);
    }
    output
}

/// Format a list of tags with their document counts
pub fn format_tag_counts(tags: &BTreeMap<String, usize>) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in tags {
        output.push_str(&format!("{} ({})\n", tag, count));
    }
    output
}

/// Format a browser page with its pager line
pub fn format_browse(result: &BrowseResult) -> String {
    let page = &result.page;
    if page.items.is_empty() {
        return format!("No listings found ({} matching)", page.total_items);
    }

    let mut output = String::new();
    for doc in &page.items {
        let name = doc.name().or(doc.title()).unwrap_or(doc.id());
        output.push_str(&format!("{}  {}", doc.path, name));
        if let Some(kind) = doc.kind() {
            output.push_str(&format!(" [{}]", kind));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Page {}/{} ({} listings)\n",
        page.number, page.total_pages, page.total_items
    ));
    if !result.available_types.is_empty() {
        output.push_str(&format!("Types: {}\n", result.available_types.join(", ")));
    }
    output
}

pub fn format_routes(routes: &[Route]) -> String {
    let mut output = String::new();
    for route in routes {
        output.push_str(&format!("{}\n", route));
    }
    output
}
