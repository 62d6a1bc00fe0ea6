//! Collection and record model
//!
//! The backend answers with a loosely-typed `{ "collections": [...] }` body.
//! Each element is classified once into a [`CollectionEntry`] and then turned
//! into the uniform [`Collection`] shape the view renders. Elements that match
//! neither accepted shape are dropped.

use serde::de::{self, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// One record inside a collection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,
}

impl Record {
    /// Build a record from an arbitrary JSON element.
    ///
    /// Never fails: a collection's record count must match what the backend
    /// sent, so malformed fields degrade to empty values instead of dropping
    /// the record.
    pub fn from_value(value: &Value) -> Self {
        let metadata = match value.get("metadata") {
            Some(Value::Object(map)) => Some(map.clone()),
            _ => None,
        };
        let embedding = value
            .get("embedding")
            .and_then(Value::as_array)
            .map(|components| components.iter().filter_map(Value::as_f64).collect());

        Self {
            id: text_field(value.get("id")),
            document: text_field(value.get("document")),
            metadata,
            embedding,
        }
    }
}

fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => canonical_json(other).to_string(),
    }
}

/// Largest integer an f64 represents exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Copy of `value` with whole-valued floats turned into integers, at any
/// depth, so `1.0` prints as `1` and `{"b":2.0}` as `{"b":2}`
pub fn canonical_json(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(canonical_json).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), canonical_json(item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// A named group of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub name: String,
    pub records: Vec<Record>,
}

impl Collection {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// The accepted shapes of one element of the `collections` array.
///
/// Variant order matters: an element carrying both `collection_name` with a
/// records array and a `name` is a [`CollectionEntry::Full`].
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CollectionEntry {
    /// `{ "collection_name": "...", "records": [...] }`
    Full {
        #[serde(deserialize_with = "non_empty_name")]
        collection_name: String,
        records: Vec<Value>,
    },
    /// `{ "name": "..." }`, records default to empty
    NameOnly {
        #[serde(deserialize_with = "non_empty_name")]
        name: String,
    },
    /// Anything else
    Unrecognized(IgnoredAny),
}

fn non_empty_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.is_empty() {
        return Err(de::Error::custom("collection name is empty"));
    }
    Ok(name)
}

impl CollectionEntry {
    /// Classify a raw JSON element
    pub fn classify(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or(Self::Unrecognized(IgnoredAny))
    }

    /// Convert into the display shape, `None` for unrecognized entries
    pub fn into_collection(self) -> Option<Collection> {
        match self {
            Self::Full {
                collection_name,
                records,
            } => Some(Collection {
                name: collection_name,
                records: records.iter().map(Record::from_value).collect(),
            }),
            Self::NameOnly { name } => Some(Collection {
                name,
                records: Vec::new(),
            }),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Reshape a parsed response body into the list of collections to display.
///
/// A body without a `collections` array yields an empty list, not an error.
pub fn normalize(body: &Value) -> Vec<Collection> {
    let Some(entries) = body.get("collections").and_then(Value::as_array) else {
        debug!("response has no collections array");
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let collection = CollectionEntry::classify(entry).into_collection();
            if collection.is_none() {
                debug!(index, "dropping unrecognized collection entry");
            }
            collection
        })
        .collect()
}
