//! Content documents

use crate::domain::metadata::{MetaValue, Metadata};
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use serde::Serialize;

/// A single content document loaded from the content tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentDocument {
    /// `/`-joined path relative to the content root, extension stripped
    pub path: String,
    /// Raw markup after the front-matter block
    pub body: String,
    pub metadata: Metadata,
}

impl ContentDocument {
    pub fn new(path: String, body: String, metadata: Metadata) -> Self {
        ContentDocument {
            path,
            body,
            metadata,
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(key)
    }

    /// Text value for `key`; numbers are not coerced
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_text)
    }

    /// Text value for `key`, with numbers rendered as text
    pub fn scalar_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            MetaValue::Text(text) => Some(text.clone()),
            MetaValue::Number(n) => Some(n.to_string()),
            MetaValue::List(_) => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetaValue::as_number)
    }

    /// List value for `key`, empty when absent or not a list
    pub fn string_list(&self, key: &str) -> &[String] {
        self.get(key).and_then(MetaValue::as_list).unwrap_or(&[])
    }

    /// `title`, falling back to `name`
    pub fn title(&self) -> Option<&str> {
        self.text("title").or_else(|| self.name())
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn summary(&self) -> Option<&str> {
        self.text("summary")
    }

    /// The listing's `type` (e.g. "Restaurant")
    pub fn kind(&self) -> Option<&str> {
        self.text("type")
    }

    pub fn tags(&self) -> &[String] {
        self.string_list("tags")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    pub fn affiliate_link(&self) -> Option<&str> {
        self.text("affiliateLink")
            .or_else(|| self.text("affiliate_link"))
    }

    pub fn image(&self) -> Option<&str> {
        self.text("photo").or_else(|| self.text("image"))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/')
    }

    /// Number of path segments; listings sit at depth 4
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last path segment (the listing id for depth-4 documents)
    pub fn id(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Body prose with markup removed.
    ///
    /// HTML/JSX blocks and top-level `import`/`export` lines are dropped;
    /// block boundaries become newlines.
    pub fn plain_text(&self) -> String {
        let mut output = String::new();

        for event in MdParser::new(&self.body) {
            match event {
                Event::Text(text) | Event::Code(text) => output.push_str(&text),
                Event::SoftBreak => output.push(' '),
                Event::HardBreak => output.push('\n'),
                Event::End(TagEnd::Paragraph)
                | Event::End(TagEnd::Heading(_))
                | Event::End(TagEnd::Item)
                | Event::End(TagEnd::CodeBlock) => {
                    if !output.ends_with('\n') {
                        output.push('\n');
                    }
                }
                Event::Start(Tag::Item) => output.push_str("- "),
                _ => {}
            }
        }

        output
            .lines()
            .map(str::trim_end)
            .filter(|line| !is_esm_line(line))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    /// First `max_chars` characters of the plain text, cut on a word boundary
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = self.plain_text().replace('\n', " ");
        if text.chars().count() <= max_chars {
            return text;
        }

        let cut: String = text.chars().take(max_chars).collect();
        let trimmed = match cut.rfind(' ') {
            Some(pos) if pos > 0 => &cut[..pos],
            _ => cut.as_str(),
        };
        format!("{}…", trimmed.trim_end())
    }
}

fn is_esm_line(line: &str) -> bool {
    line.starts_with("import ") || line.starts_with("export ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str, body: &str, meta: &[(&str, MetaValue)]) -> ContentDocument {
        let metadata = meta
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        ContentDocument::new(path.to_string(), body.to_string(), metadata)
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let d = doc("a", "", &[("name", "Le Bistro".into())]);
        assert_eq!(d.title(), Some("Le Bistro"));

        let d = doc(
            "a",
            "",
            &[("name", "Le Bistro".into()), ("title", "Bistro!".into())],
        );
        assert_eq!(d.title(), Some("Bistro!"));
    }

    #[test]
    fn test_scalar_text_renders_numbers() {
        let d = doc(
            "a",
            "",
            &[
                ("name", 1789.0.into()),
                ("title", "Le 1789".into()),
                ("tags", vec!["x".to_string()].into()),
            ],
        );
        assert_eq!(d.scalar_text("name").as_deref(), Some("1789"));
        assert_eq!(d.scalar_text("title").as_deref(), Some("Le 1789"));
        assert_eq!(d.scalar_text("tags"), None);
        assert_eq!(d.scalar_text("missing"), None);
        assert_eq!(d.name(), None);
    }

    #[test]
    fn test_affiliate_link_aliases() {
        let d = doc("a", "", &[("affiliate_link", "https://x".into())]);
        assert_eq!(d.affiliate_link(), Some("https://x"));
        let d = doc("a", "", &[("affiliateLink", "https://y".into())]);
        assert_eq!(d.affiliate_link(), Some("https://y"));
    }

    #[test]
    fn test_tags_absent_or_wrong_type() {
        let d = doc("a", "", &[]);
        assert!(d.tags().is_empty());
        let d = doc("a", "", &[("tags", "bistro".into())]);
        assert!(d.tags().is_empty());
        assert!(!d.has_tag("bistro"));
    }

    #[test]
    fn test_depth_and_id() {
        let d = doc("restaurants/Ile-de-France/Paris/le-bistro", "", &[]);
        assert_eq!(d.depth(), 4);
        assert_eq!(d.id(), "le-bistro");

        let d = doc("about", "", &[]);
        assert_eq!(d.depth(), 1);
        assert_eq!(d.id(), "about");
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let body = "import Map from './Map'\n\n# Le Bistro\n\nA **cosy** place\nnear `Seine`.\n\n<Map lat={48} />\n\n- wifi\n- terrasse\n";
        let d = doc("a", body, &[]);
        assert_eq!(
            d.plain_text(),
            "Le Bistro\nA cosy place near Seine.\n- wifi\n- terrasse"
        );
    }

    #[test]
    fn test_excerpt_cuts_on_word_boundary() {
        let d = doc("a", "Un restaurant familial au coeur de Paris", &[]);
        assert_eq!(d.excerpt(100), "Un restaurant familial au coeur de Paris");
        assert_eq!(d.excerpt(15), "Un restaurant…");
    }
}
