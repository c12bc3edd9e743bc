use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

// ---------- Backend reference data ----------

/// One emoji the backend recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedEmoji {
    /// The literal emoji, e.g. `"❤"`.
    pub character: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Space or dash separated hex codepoints, e.g. `"2764"`.
    pub code_point: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub subgroup: String,
}

/// The backend's supported-emoji reference document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceFile {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_accessed: String,
    #[serde(default)]
    pub version: String,
    pub map: OrderedEmojiMap,
}

/// The reference `map` object, kept in document order.
///
/// `serde_json` sorts object keys unless `preserve_order` is enabled, so the
/// entries are read through a visitor that records them as they arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedEmojiMap(pub Vec<(String, SupportedEmoji)>);

impl OrderedEmojiMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, SupportedEmoji)> {
        self.0.iter()
    }
}

impl From<Vec<SupportedEmoji>> for OrderedEmojiMap {
    fn from(emojis: Vec<SupportedEmoji>) -> Self {
        OrderedEmojiMap(
            emojis
                .into_iter()
                .map(|e| (e.character.clone(), e))
                .collect(),
        )
    }
}

impl Serialize for OrderedEmojiMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, emoji) in &self.0 {
            map.serialize_entry(key, emoji)?;
        }
        map.end()
    }
}

struct OrderedEmojiMapVisitor;

impl<'de> Visitor<'de> for OrderedEmojiMapVisitor {
    type Value = OrderedEmojiMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of emoji character to emoji descriptor")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, emoji)) = access.next_entry::<String, SupportedEmoji>()? {
            entries.push((key, emoji));
        }
        Ok(OrderedEmojiMap(entries))
    }
}

impl<'de> Deserialize<'de> for OrderedEmojiMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedEmojiMapVisitor)
    }
}

// ---------- Front-end catalog ----------

/// Keeps an explicit `null` as `Some(Value::Null)` so it can be written back.
/// Combined with `#[serde(default)]`, an absent field stays `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Reads `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The emoji-mart style catalog the front end ships.
///
/// Only `emojis` is ever inspected. Every other field, including ones this
/// type does not name, is carried through untouched; `categories`,
/// `aliases` and `sheet` are held as raw JSON for that reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontendCatalog {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emojis: HashMap<String, FrontendEmoji>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub aliases: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub sheet: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontendEmoji {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skins: Vec<Skin>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single tone/style rendering of an emoji.
///
/// A missing or null `unified` reads as empty, which no registry contains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    #[serde(default, deserialize_with = "null_as_default")]
    pub unified: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub native: String,
    /// Sprite-sheet coordinates and anything else the picker attaches.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Skin {
    pub fn new(unified: impl Into<String>, native: impl Into<String>) -> Self {
        Self {
            unified: unified.into(),
            native: native.into(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_map_keeps_document_order() {
        let raw = r#"{
            "date": "2023-01-01",
            "dateAccessed": "2023-02-01",
            "version": "15.0",
            "map": {
                "😀": {"character": "😀", "name": "grinning face", "comment": "", "codePoint": "1F600", "group": "Smileys & Emotion", "subgroup": "face-smiling"},
                "❤": {"character": "❤", "name": "red heart", "comment": "", "codePoint": "2764", "group": "Smileys & Emotion", "subgroup": "heart"},
                "👍": {"character": "👍", "name": "thumbs up", "comment": "", "codePoint": "1F44D", "group": "People & Body", "subgroup": "hand-fingers-closed"}
            }
        }"#;
        let file: ReferenceFile = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = file.map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["😀", "❤", "👍"]);
        assert_eq!(file.date_accessed, "2023-02-01");
        assert_eq!(file.map.0[1].1.code_point, "2764");
    }

    #[test]
    fn test_reference_map_rejects_non_object() {
        let raw = r#"{"map": ["😀"]}"#;
        assert!(serde_json::from_str::<ReferenceFile>(raw).is_err());
    }

    #[test]
    fn test_catalog_preserves_unknown_fields() {
        let raw = json!({
            "categories": [{"id": "people", "emojis": ["grinning"]}],
            "emojis": {
                "grinning": {
                    "id": "grinning",
                    "name": "Grinning Face",
                    "keywords": ["smile"],
                    "skins": [{"unified": "1f600", "native": "😀", "x": 32, "y": 46}],
                    "version": 1,
                    "emoticons": [":D"]
                }
            },
            "aliases": {"smile": "grinning"},
            "sheet": {"cols": 61, "rows": 61},
            "originalCategories": ["people"]
        });

        let catalog: FrontendCatalog = serde_json::from_value(raw.clone()).unwrap();
        let emoji = &catalog.emojis["grinning"];
        assert_eq!(emoji.extra["emoticons"], json!([":D"]));
        assert_eq!(emoji.skins[0].extra["x"], json!(32));
        assert_eq!(catalog.extra["originalCategories"], json!(["people"]));

        let back = serde_json::to_value(&catalog).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_catalog_missing_skins_defaults_empty() {
        let raw = json!({"emojis": {"a": {"id": "a"}}});
        let catalog: FrontendCatalog = serde_json::from_value(raw).unwrap();
        assert!(catalog.emojis["a"].skins.is_empty());
        assert!(catalog.categories.is_none());
        assert!(catalog.aliases.is_none());

        let back = serde_json::to_value(&catalog).unwrap();
        assert!(back.get("categories").is_none());
        assert!(back.get("sheet").is_none());
    }

    #[test]
    fn test_catalog_keeps_explicit_nulls() {
        let raw = json!({
            "categories": null,
            "emojis": {},
            "aliases": null,
            "sheet": null
        });
        let catalog: FrontendCatalog = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(catalog.categories, Some(Value::Null));
        assert_eq!(catalog.aliases, Some(Value::Null));

        let back = serde_json::to_value(&catalog).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_emoji_null_fields_read_as_empty() {
        let raw = json!({
            "emojis": {
                "a": {
                    "id": "a",
                    "name": null,
                    "keywords": null,
                    "skins": [{"native": "?"}, {"unified": null, "native": null}],
                    "version": null
                }
            }
        });
        let catalog: FrontendCatalog = serde_json::from_value(raw).unwrap();
        let emoji = &catalog.emojis["a"];
        assert!(emoji.keywords.is_empty());
        assert_eq!(emoji.version, 0);
        assert_eq!(emoji.skins[0].unified, "");
        assert_eq!(emoji.skins[1], Skin::new("", ""));
    }
}
