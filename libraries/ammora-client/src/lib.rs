//! Ammora Catalog Client
//!
//! HTTP client library for the read-only album catalog API.
//!
//! # Endpoints
//!
//! - `GET {base}/albums` - every album, in server order
//! - `GET {base}/albums/{id}` - a single album, 404 when the id is unknown
//!
//! The client is a single-shot request wrapper: one outbound call per
//! operation, no retries and no caching. Build it once and share it; clones
//! reuse the same connection pool.
//!
//! # Example
//!
//! ```ignore
//! use ammora_client::{ClientConfig, MusicApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MusicApiClient::new(ClientConfig::new("https://music.example.com/api"))?;
//!
//!     let albums = client.list_albums().await?;
//!     println!("Found {} albums", albums.len());
//!
//!     if let Some(first) = albums.first() {
//!         let album = client.get_album(&first.id).await?;
//!         println!("{} by {}", album.title, album.artist);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod albums;
mod client;
mod error;
mod repository;
mod types;

// Re-export main types
pub use client::MusicApiClient;
pub use error::{ClientError, Result};
pub use repository::AlbumRepository;
pub use types::{ClientConfig, DEFAULT_BASE_URL};
