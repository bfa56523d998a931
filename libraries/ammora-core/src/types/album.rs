//! Album types

use super::AlbumId;
use serde::{Deserialize, Serialize};

/// An album as served by the catalog API.
///
/// Every field is required on decode; unknown fields are ignored. A value is
/// a complete snapshot of one fetch and is never patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Lookup key for detail fetches
    pub id: AlbumId,
    /// Display name
    pub title: String,
    /// Artist display name
    pub artist: String,
    /// Free text, may be empty
    pub description: String,
    /// Artwork locator. Transported as-is, never resolved here.
    pub image: String,
}

impl Album {
    /// Create a new album
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    /// Whether the album carries an artwork locator at all
    pub fn has_artwork(&self) -> bool {
        !self.image.trim().is_empty()
    }
}
