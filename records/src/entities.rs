//! Catalog entities: tracks, subjects, chapters, notes, videos, universities.
//!
//! Field names match the backend JSON. Every struct is `#[serde(default)]`
//! so partial payloads (list rows vs. detail rows) decode into the same type.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::listing::Listed;

/// Backend-assigned primary key.
pub type RecordId = u64;

/// Top-level curriculum grouping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "deserialize_actor")]
    pub created_by: Option<String>,
    pub created_on: Option<String>,
    #[serde(deserialize_with = "deserialize_actor")]
    pub modified_by: Option<String>,
    pub modified_on: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_university: bool,
}

/// A topic within a track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub chapters: Vec<Chapter>,
    pub track: Option<RecordId>,
    #[serde(deserialize_with = "deserialize_actor")]
    pub created_by: Option<String>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

/// A subdivision of a subject holding notes, videos and chapter tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail: Option<String>,
    pub subject: Option<RecordId>,
    #[serde(deserialize_with = "deserialize_actor")]
    pub created_by: Option<String>,
    pub created_on: Option<String>,
    #[serde(deserialize_with = "deserialize_actor")]
    pub modified_by: Option<String>,
    pub modified_on: Option<String>,
}

/// A PDF note attached to a chapter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail: Option<String>,
    pub source: Option<String>,
    pub chapter: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_deleted: bool,
    pub deleted_on: Option<String>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

/// A recorded lecture attached to a chapter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail: Option<String>,
    pub video: Option<String>,
    pub chapter: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_deleted: bool,
    pub deleted_on: Option<String>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

/// A university affiliated with a track.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct University {
    pub id: RecordId,
    pub track: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "deserialize_actor")]
    pub created_by: Option<String>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

impl Listed for Track {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.created_by.as_deref().unwrap_or_default()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }
}

impl Listed for Subject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }
}

impl Listed for Chapter {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }
}

impl Listed for Note {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }

    fn is_hidden(&self) -> bool {
        self.is_deleted
    }
}

impl Listed for Video {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }

    fn is_hidden(&self) -> bool {
        self.is_deleted
    }
}

impl Listed for University {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }
}

/// Decode `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Audit columns arrive as a username, a numeric user id, or a nested user
/// object depending on the serializer; flatten all three to a label.
fn deserialize_actor<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(name) => Ok(Some(name)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        serde_json::Value::Object(map) => Ok(["name", "username", "email"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(ToOwned::to_owned)),
        other => Err(D::Error::custom(format!("unexpected actor value: {other}"))),
    }
}
