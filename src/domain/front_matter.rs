//! Front-matter splitting and parsing
//!
//! A document may start with a YAML block fenced by `---` lines:
//!
//! ```
//! use annuaire::domain::front_matter;
//!
//! let (meta, body) = front_matter::parse("---\nname: Le Bistro\n---\n# Menu\n");
//! assert_eq!(meta["name"].as_text(), Some("Le Bistro"));
//! assert_eq!(body, "# Menu\n");
//! ```

use crate::domain::metadata::{metadata_from_yaml, Metadata};
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

fn block_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
    })
}

/// Split a source into its raw front-matter block and body.
///
/// Without a complete fenced block the whole source is the body.
pub fn split(source: &str) -> (Option<&str>, &str) {
    // A UTF-8 BOM would hide the opening fence
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    match block_regex().captures(source) {
        Some(captures) => {
            let end = captures.get(0).map_or(0, |m| m.end());
            let yaml = captures.get(1).map_or("", |m| m.as_str());
            (Some(yaml), &source[end..])
        }
        None => (None, source),
    }
}

/// Parse a document into metadata and body. Never fails: malformed or
/// non-mapping front-matter yields empty metadata and the body is kept.
pub fn parse(source: &str) -> (Metadata, String) {
    let (block, body) = split(source);

    let metadata = match block {
        None => Metadata::new(),
        Some(yaml) if yaml.trim().is_empty() => Metadata::new(),
        Some(yaml) => match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
            Ok(serde_yaml::Value::Mapping(mapping)) => metadata_from_yaml(&mapping),
            Ok(_) => {
                warn!("front-matter is not a key/value mapping, ignoring it");
                Metadata::new()
            }
            Err(e) => {
                warn!(error = %e, "malformed front-matter, ignoring it");
                Metadata::new()
            }
        },
    };

    (metadata, body.to_string())
}
