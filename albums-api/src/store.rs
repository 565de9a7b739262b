//! In-memory album store
//!
//! Holds the albums in insertion order for the lifetime of the process.
//! The store is owned by [`crate::AppState`] behind a lock; nothing here is
//! global.

use albums_common::{Album, Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// Catalog served when no seed file is configured
const BUNDLED_CATALOG: &str = include_str!("../data/albums.json");

/// Ordered, in-memory collection of albums
#[derive(Debug, Default, Clone)]
pub struct AlbumStore {
    albums: Vec<Album>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing albums, keeping their ids verbatim.
    ///
    /// Fails if two albums share an `albumId`.
    pub fn from_albums(albums: Vec<Album>) -> Result<Self> {
        let mut seen = HashSet::new();
        for id in albums.iter().filter_map(Album::id) {
            if !seen.insert(id) {
                return Err(Error::InvalidInput(format!("Duplicate albumId {:?}", id)));
            }
        }
        Ok(Self { albums })
    }

    /// Load a seed file containing a JSON array of albums
    pub fn load_seed(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Store holding the catalog compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    fn from_json(content: &str) -> Result<Self> {
        let albums: Vec<Album> = serde_json::from_str(content)?;
        Self::from_albums(albums)
    }

    /// All albums, in insertion order
    pub fn all(&self) -> &[Album] {
        &self.albums
    }

    pub fn len(&self) -> usize {
        self.albums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// Find an album by exact `albumId` match
    pub fn get(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.id() == Some(id))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.albums.iter().position(|album| album.id() == Some(id))
    }

    /// Smallest positive integer, as a string, not already used as an id.
    ///
    /// Ids are compared as strings, so `"01"` or `"abc"` never block a probe.
    pub fn next_id(&self) -> String {
        let mut ids: Vec<&str> = self.albums.iter().filter_map(Album::id).collect();
        ids.sort_unstable();

        let mut candidate: u64 = 1;
        loop {
            let probe = candidate.to_string();
            if ids.binary_search(&probe.as_str()).is_err() {
                return probe;
            }
            candidate += 1;
        }
    }

    /// Assign a fresh id to `album`, append it and return the id.
    ///
    /// Any `albumId` supplied by the caller is overwritten.
    pub fn insert(&mut self, mut album: Album) -> String {
        let id = self.next_id();
        album.album_id = Some(id.clone());
        self.albums.push(album);
        id
    }

    /// Replace the album stored under `id`, keeping its position.
    pub fn replace(&mut self, id: &str, mut album: Album) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        album.album_id = Some(id.to_string());
        self.albums[index] = album;
        Ok(())
    }

    /// Remove and return the album stored under `id`
    pub fn remove(&mut self, id: &str) -> Result<Album> {
        let index = self
            .position(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.albums.remove(index))
    }
}
