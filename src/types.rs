use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

use crate::constants;

/// One scraped record exactly as the upstream fetch step wrote it.
///
/// No field is guaranteed; accessors return `None` for absent, null,
/// blank or wrong-shaped values so a bad field never sinks the item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawItem(Map<String, Value>);

impl RawItem {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Trimmed, non-empty string value of `key`.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Identifier at `key`: a non-blank string, or a number rendered as text.
    pub fn id_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Number(n) => Some(n.to_string()),
            _ => self.str_field(key).map(str::to_string),
        }
    }

    /// First key in `keys` that holds a usable string.
    pub fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.str_field(k))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Upstream origin of a normalized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedSource {
    #[serde(rename = "fauske_kommune")]
    FauskeKommune,
    #[serde(rename = "fauskenf")]
    Fauskenf,
}

impl FeedSource {
    pub fn id(&self) -> &'static str {
        match self {
            FeedSource::FauskeKommune => constants::FAUSKE_KOMMUNE_SOURCE,
            FeedSource::Fauskenf => constants::FAUSKENF_SOURCE,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FeedSource::FauskeKommune => constants::FAUSKE_KOMMUNE_NAME,
            FeedSource::Fauskenf => constants::FAUSKENF_NAME,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            FeedSource::FauskeKommune => constants::FAUSKE_KOMMUNE_BASE_URL,
            FeedSource::Fauskenf => constants::FAUSKENF_BASE_URL,
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Common record every source normalizer emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub id: String,
    pub source: FeedSource,
    pub source_name: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    /// Canonical date, serialized as `YYYY-MM-DD`.
    pub published: Option<NaiveDate>,
    pub published_text: Option<String>,
    pub ingress: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub raw: RawItem,
}

/// Input document written by a fetch step: `{ lastUpdated, items }`.
///
/// Only `items` drives the merge. `lastUpdated` may be any JSON value and a
/// non-array `items` counts as no items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeed {
    #[serde(default)]
    pub last_updated: Option<Value>,
    /// Entries are kept as plain values so one non-object entry can be skipped.
    #[serde(default, deserialize_with = "items_or_empty")]
    pub items: Vec<Value>,
}

fn items_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(items),
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(other) => {
            warn!(kind = json_kind(&other), "Feed items is not an array, treating as empty");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The merged, date-sorted news feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedFeed {
    pub last_updated: DateTime<Utc>,
    pub items: Vec<NormalizedItem>,
}

impl CombinedFeed {
    pub fn new(items: Vec<NormalizedItem>, last_updated: DateTime<Utc>) -> Self {
        Self { last_updated, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawItem {
        RawItem::from_value(value).unwrap()
    }

    #[test]
    fn test_str_field_ignores_blank_and_wrong_shape() {
        let item = raw(json!({
            "title": "  Ny barnehage  ",
            "ingress": "",
            "image": 42,
            "category": null
        }));
        assert_eq!(item.str_field("title"), Some("Ny barnehage"));
        assert_eq!(item.str_field("ingress"), None);
        assert_eq!(item.str_field("image"), None);
        assert_eq!(item.str_field("category"), None);
        assert_eq!(item.str_field("missing"), None);
    }

    #[test]
    fn test_id_field_accepts_strings_and_numbers() {
        let item = raw(json!({ "a": " b-1 ", "n": 42, "blank": "", "flag": true }));
        assert_eq!(item.id_field("a").as_deref(), Some("b-1"));
        assert_eq!(item.id_field("n").as_deref(), Some("42"));
        assert_eq!(item.id_field("blank"), None);
        assert_eq!(item.id_field("flag"), None);
        assert_eq!(item.id_field("missing"), None);
    }

    #[test]
    fn test_first_str_follows_fallback_order() {
        let item = raw(json!({ "image": "b.jpg", "imageUrl": "a.jpg" }));
        assert_eq!(item.first_str(&["imageUrl", "image"]), Some("a.jpg"));
        assert_eq!(item.first_str(&["thumbnail", "image"]), Some("b.jpg"));
        assert_eq!(item.first_str(&["thumbnail"]), None);
    }

    #[test]
    fn test_raw_item_round_trips_unchanged() {
        let original = json!({
            "title": "X",
            "published": null,
            "nested": { "a": [1, 2, 3] },
            "bodyHtml": "<p>æøå</p>"
        });
        let item = raw(original.clone());
        assert_eq!(serde_json::to_value(&item).unwrap(), original);
    }

    #[test]
    fn test_raw_feed_tolerates_null_or_missing_items() {
        let feed: RawFeed = serde_json::from_value(json!({ "lastUpdated": "x", "items": null })).unwrap();
        assert!(feed.items.is_empty());
        let feed: RawFeed = serde_json::from_value(json!({})).unwrap();
        assert!(feed.items.is_empty());
        assert!(feed.last_updated.is_none());
    }

    #[test]
    fn test_raw_feed_tolerates_odd_header_shapes() {
        let feed: RawFeed =
            serde_json::from_value(json!({ "lastUpdated": 1731840000, "items": [{ "title": "X" }] })).unwrap();
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.last_updated, Some(json!(1731840000)));

        let feed: RawFeed = serde_json::from_value(json!({ "items": {} })).unwrap();
        assert!(feed.items.is_empty());
        let feed: RawFeed = serde_json::from_value(json!({ "items": "none" })).unwrap();
        assert!(feed.items.is_empty());
    }

    #[test]
    fn test_source_serializes_to_namespace() {
        assert_eq!(serde_json::to_value(FeedSource::FauskeKommune).unwrap(), json!("fauske_kommune"));
        assert_eq!(serde_json::to_value(FeedSource::Fauskenf).unwrap(), json!("fauskenf"));
        assert_eq!(FeedSource::Fauskenf.display_name(), "Fauske Næringsforum");
    }
}
