//! Album record model
//!
//! Only `albumId` is typed, because the server owns it. Every descriptive
//! field (`artistName`, `collectionName`, `primaryGenreName`, ...) is kept
//! in [`Album::fields`] exactly as the client sent it, `null` included.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A music release record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Server-assigned identifier (decimal string of a positive integer).
    /// A non-string `albumId` in incoming JSON reads as absent.
    #[serde(
        rename = "albumId",
        default,
        deserialize_with = "string_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub album_id: Option<String>,

    /// Descriptive fields, passed through untouched
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn string_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        _ => None,
    })
}

impl Album {
    /// Convenience constructor used by seeds and tests
    pub fn new(album_id: impl Into<String>, artist_name: impl Into<String>) -> Self {
        let artist_name: String = artist_name.into();
        Self {
            album_id: Some(album_id.into()),
            ..Self::default()
        }
        .with_field("artistName", artist_name)
    }

    /// Builder-style field setter
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Identifier as a string slice, if assigned
    pub fn id(&self) -> Option<&str> {
        self.album_id.as_deref()
    }

    /// Raw value of a descriptive field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A descriptive field, only if it holds a string
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Check the album is acceptable for create or update.
    ///
    /// The only requirement is that the `artistName` key is present; its
    /// value, even `null`, is not inspected.
    pub fn validate(&self) -> Result<()> {
        if !self.fields.contains_key("artistName") {
            return Err(Error::InvalidInput("artistName is required".to_string()));
        }
        Ok(())
    }
}
