//! Lenient access to raw catalog items.
//!
//! This module provides [`RawCatalogItem`], a thin wrapper over the untyped
//! JSON the catalog API returns, and [`FieldGroup`], a defaulting accessor
//! for its optional sub-objects. No shape is enforced: absence of a
//! sub-object or of a leaf field resolves to a default, never an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One item as returned by the catalog API.
///
/// The catalog makes no guarantees about which sub-objects are present on
/// any given item, so the wrapper accepts any JSON value and exposes the
/// known field groups (`snippet`, `statistics`, `contentDetails`,
/// `topicDetails`) through [`FieldGroup`] accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCatalogItem(Value);

impl RawCatalogItem {
    /// Wrap a raw JSON value. Nothing is validated.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The catalog's stable identifier for this item, if present.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The `snippet` field group.
    pub fn snippet(&self) -> FieldGroup<'_> {
        self.group("snippet")
    }

    /// The `statistics` field group.
    pub fn statistics(&self) -> FieldGroup<'_> {
        self.group("statistics")
    }

    /// The `contentDetails` field group.
    pub fn content_details(&self) -> FieldGroup<'_> {
        self.group("contentDetails")
    }

    /// The `topicDetails` field group.
    pub fn topic_details(&self) -> FieldGroup<'_> {
        self.group("topicDetails")
    }

    /// Get a reference to the inner JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume and return the inner JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    fn group(&self, key: &str) -> FieldGroup<'_> {
        FieldGroup {
            fields: self.0.get(key).and_then(Value::as_object),
        }
    }
}

impl From<Value> for RawCatalogItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Serialize for RawCatalogItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawCatalogItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(Value::deserialize(deserializer)?))
    }
}

/// A defaulting view over one optional sub-object of a raw item.
///
/// Every accessor treats an absent group, an absent key, or a value of the
/// wrong type as "not there" and returns the field's default.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> FieldGroup<'a> {
    /// A nested sub-object within this group (e.g. `snippet.thumbnails`).
    pub fn nested(&self, key: &str) -> FieldGroup<'a> {
        FieldGroup {
            fields: self
                .fields
                .and_then(|f| f.get(key))
                .and_then(Value::as_object),
        }
    }

    /// A string field; `None` when absent or not a string.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields
            .and_then(|f| f.get(key))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    /// A list-of-strings field; empty when absent. Non-string entries are
    /// skipped, order is preserved.
    pub fn text_list(&self, key: &str) -> Vec<String> {
        self.fields
            .and_then(|f| f.get(key))
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A boolean field; `None` when absent or not a boolean.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.fields
            .and_then(|f| f.get(key))
            .and_then(Value::as_bool)
    }

    /// A counter field. The catalog encodes counters as decimal strings;
    /// bare JSON numbers are accepted too. Absent or unparseable values
    /// resolve to 0 rather than aborting the item.
    pub fn count(&self, key: &str) -> u64 {
        match self.fields.and_then(|f| f.get(key)) {
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RawCatalogItem {
        RawCatalogItem::new(json!({
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "title": "A video",
                "tags": ["music", "retro"],
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/x/default.jpg" }
                }
            },
            "statistics": {
                "viewCount": "1234",
                "likeCount": 99,
                "commentCount": "not-a-number"
            }
        }))
    }

    #[test]
    fn id_and_text_fields() {
        let item = sample();
        assert_eq!(item.id(), Some("dQw4w9WgXcQ"));
        assert_eq!(item.snippet().text("title"), Some("A video".to_string()));
        assert_eq!(item.snippet().text("description"), None);
    }

    #[test]
    fn nested_group_access() {
        let item = sample();
        let url = item.snippet().nested("thumbnails").nested("default").text("url");
        assert_eq!(url, Some("https://i.ytimg.com/vi/x/default.jpg".to_string()));

        // Absent nesting levels stay lenient.
        let none = item.snippet().nested("thumbnails").nested("maxres").text("url");
        assert_eq!(none, None);
    }

    #[test]
    fn counts_parse_with_defaults() {
        let statistics = sample();
        let statistics = statistics.statistics();
        assert_eq!(statistics.count("viewCount"), 1234);
        assert_eq!(statistics.count("likeCount"), 99);
        assert_eq!(statistics.count("commentCount"), 0);
        assert_eq!(statistics.count("favoriteCount"), 0);
    }

    #[test]
    fn text_list_defaults_to_empty() {
        let item = sample();
        assert_eq!(item.snippet().text_list("tags"), vec!["music", "retro"]);
        assert!(item.topic_details().text_list("topicCategories").is_empty());
    }

    #[test]
    fn non_object_item_resolves_to_defaults() {
        let item = RawCatalogItem::new(json!("not an object"));
        assert_eq!(item.id(), None);
        assert_eq!(item.snippet().text("title"), None);
        assert_eq!(item.statistics().count("viewCount"), 0);
    }

    #[test]
    fn wrong_typed_group_is_treated_as_absent() {
        let item = RawCatalogItem::new(json!({ "snippet": "oops" }));
        assert_eq!(item.snippet().text("title"), None);
        assert!(item.snippet().text_list("tags").is_empty());
    }
}
