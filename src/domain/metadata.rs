//! Front-matter metadata values

use serde::Serialize;
use serde_yaml::Value as Yaml;
use std::collections::BTreeMap;
use tracing::debug;

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetaValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Convert a YAML value. Returns None for nulls and nested mappings.
    fn from_yaml(value: &Yaml) -> Option<Self> {
        match value {
            Yaml::Sequence(items) => Some(MetaValue::List(
                items.iter().filter_map(scalar_to_string).collect(),
            )),
            Yaml::Number(n) => n.as_f64().map(MetaValue::Number),
            Yaml::Tagged(tagged) => Self::from_yaml(&tagged.value),
            other => scalar_to_string(other).map(MetaValue::Text),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(value: Vec<String>) -> Self {
        MetaValue::List(value)
    }
}

fn scalar_to_string(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Tagged(tagged) => scalar_to_string(&tagged.value),
        Yaml::Null | Yaml::Sequence(_) | Yaml::Mapping(_) => None,
    }
}

/// Ordered key/value bag parsed from a document's front-matter
pub type Metadata = BTreeMap<String, MetaValue>;

/// Build metadata from a parsed YAML mapping, dropping values that have no
/// `MetaValue` representation.
pub fn metadata_from_yaml(mapping: &serde_yaml::Mapping) -> Metadata {
    let mut metadata = Metadata::new();

    for (key, value) in mapping {
        let Some(key) = scalar_to_string(key) else {
            debug!("skipping non-scalar front-matter key");
            continue;
        };
        match MetaValue::from_yaml(value) {
            Some(meta) => {
                metadata.insert(key, meta);
            }
            None => debug!(key = %key, "skipping unsupported front-matter value"),
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> serde_yaml::Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_scalars_and_lists() {
        let meta = metadata_from_yaml(&mapping(
            "name: Le Bistro\nrating: 4.5\nreviews: 120\ntags: [bistro, paris]\n",
        ));

        assert_eq!(meta["name"], MetaValue::Text("Le Bistro".to_string()));
        assert_eq!(meta["rating"].as_number(), Some(4.5));
        assert_eq!(meta["reviews"].as_number(), Some(120.0));
        assert_eq!(
            meta["tags"].as_list().unwrap(),
            &["bistro".to_string(), "paris".to_string()]
        );
    }

    #[test]
    fn test_booleans_become_text() {
        let meta = metadata_from_yaml(&mapping("featured: true\n"));
        assert_eq!(meta["featured"].as_text(), Some("true"));
    }

    #[test]
    fn test_null_and_nested_values_are_dropped() {
        let meta = metadata_from_yaml(&mapping(
            "empty:\ngeo:\n  lat: 48.8\n  lng: 2.3\nname: ok\n",
        ));
        assert_eq!(meta.len(), 1);
        assert!(meta.contains_key("name"));
    }

    #[test]
    fn test_list_elements_are_stringified() {
        let meta = metadata_from_yaml(&mapping("codes: [75001, true, x, {a: 1}]\n"));
        assert_eq!(
            meta["codes"].as_list().unwrap(),
            &["75001".to_string(), "true".to_string(), "x".to_string()]
        );
    }

    #[test]
    fn test_serializes_untagged() {
        let mut meta = Metadata::new();
        meta.insert("name".into(), "A".into());
        meta.insert("rating".into(), 4.0.into());
        meta.insert("tags".into(), vec!["x".to_string()].into());

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({"name": "A", "rating": 4.0, "tags": ["x"]}));
    }
}
