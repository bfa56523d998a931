//! Repository seam between the state controllers and the catalog.

use crate::client::MusicApiClient;
use crate::error::Result;
use ammora_core::{Album, AlbumId};
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the album catalog.
///
/// Implementations must perform at most one outbound request per call and
/// keep no per-call state, so a single instance can be shared by every
/// controller without synchronization.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// List every album, in server order
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// Fetch one album by ID
    async fn get_album(&self, id: &AlbumId) -> Result<Album>;
}

#[async_trait]
impl AlbumRepository for MusicApiClient {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        MusicApiClient::list_albums(self).await
    }

    async fn get_album(&self, id: &AlbumId) -> Result<Album> {
        MusicApiClient::get_album(self, id).await
    }
}

#[async_trait]
impl<R: AlbumRepository + ?Sized> AlbumRepository for Arc<R> {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        (**self).list_albums().await
    }

    async fn get_album(&self, id: &AlbumId) -> Result<Album> {
        (**self).get_album(id).await
    }
}
