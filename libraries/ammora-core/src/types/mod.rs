//! Domain types

mod album;
mod ids;

pub use album::Album;
pub use ids::AlbumId;
