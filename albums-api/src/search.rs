//! Album search filtering
//!
//! Only three album fields may be searched. A query naming any other key
//! is rejected as a whole; otherwise every condition must match exactly.

use albums_common::Album;
use thiserror::Error;

/// Keys accepted by `GET /albums/search`
pub const ALLOWED_SEARCH_KEYS: [&str; 3] = ["primaryGenreName", "artistName", "collectionName"];

/// A searchable album field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    PrimaryGenreName,
    ArtistName,
    CollectionName,
}

impl SearchKey {
    /// Parse a query-string key against the allow-list
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "primaryGenreName" => Some(Self::PrimaryGenreName),
            "artistName" => Some(Self::ArtistName),
            "collectionName" => Some(Self::CollectionName),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimaryGenreName => "primaryGenreName",
            Self::ArtistName => "artistName",
            Self::CollectionName => "collectionName",
        }
    }

    /// The album's value for this field. Absent and non-string values
    /// yield `None` and so never match.
    pub fn value_of(self, album: &Album) -> Option<&str> {
        album.str_field(self.as_str())
    }
}

/// Query named keys outside the allow-list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The following keys are forbidden: '{}'", .0.join("', '"))]
pub struct ForbiddenKeys(pub Vec<String>);

/// Validated search conditions, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    conditions: Vec<(SearchKey, String)>,
}

impl SearchQuery {
    /// Build a query from decoded key/value pairs.
    ///
    /// Every forbidden key is reported once, in order of first appearance.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ForbiddenKeys>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut conditions = Vec::new();
        let mut forbidden: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let key = key.into();
            match SearchKey::parse(&key) {
                Some(search_key) => conditions.push((search_key, value.into())),
                None => {
                    if !forbidden.contains(&key) {
                        forbidden.push(key);
                    }
                }
            }
        }

        if forbidden.is_empty() {
            Ok(Self { conditions })
        } else {
            Err(ForbiddenKeys(forbidden))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// True if the album satisfies every condition
    pub fn matches(&self, album: &Album) -> bool {
        self.conditions
            .iter()
            .all(|(key, value)| key.value_of(album) == Some(value.as_str()))
    }

    /// Filter albums, preserving their order
    pub fn apply<'a>(&self, albums: &'a [Album]) -> Vec<&'a Album> {
        albums.iter().filter(|album| self.matches(album)).collect()
    }
}
