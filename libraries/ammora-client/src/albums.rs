//! Album catalog operations.

use crate::client::MusicApiClient;
use crate::error::{ClientError, Result};
use ammora_core::{Album, AlbumId};
use tracing::{debug, warn};

impl MusicApiClient {
    /// Get every album, in the order the server returns them.
    ///
    /// An empty array is a valid, successful answer.
    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        let url = self.endpoint(&["albums"])?;
        debug!(url = %url, "Fetching album list");

        let albums: Vec<Album> = self.get_json(url, None).await?;

        debug!(albums = albums.len(), "Fetched album list");
        Ok(albums)
    }

    /// Get a single album by ID.
    ///
    /// A 404 from the server maps to [`ClientError::NotFound`]. Empty and
    /// dot-only ids are rejected before any request, since URL normalization
    /// would turn them into a request for the collection.
    pub async fn get_album(&self, id: &AlbumId) -> Result<Album> {
        if matches!(id.as_str(), "" | "." | "..") {
            warn!(album_id = ?id.as_str(), "Rejecting album id that is not a path segment");
            return Err(ClientError::InvalidId(id.as_str().to_string()));
        }

        let url = self.endpoint(&["albums", id.as_str()])?;
        debug!(url = %url, album_id = %id, "Fetching album");

        let album: Album = self
            .get_json(url, Some(ClientError::NotFound { id: id.clone() }))
            .await?;

        debug!(album_id = %album.id, title = %album.title, "Fetched album");
        Ok(album)
    }
}
