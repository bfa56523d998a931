//! Ammora Core
//!
//! Domain types shared by the Ammora music browser crates.
//!
//! The remote catalog exposes a single entity, the [`Album`], keyed by a
//! string [`AlbumId`]. Every other crate in the workspace (HTTP client,
//! state controllers, terminal presenter) builds on these types.
//!
//! # Example
//!
//! ```rust
//! use ammora_core::{Album, AlbumId};
//!
//! let album = Album::new(
//!     AlbumId::new("42"),
//!     "Blue Train",
//!     "John Coltrane",
//!     "Hard bop, 1957",
//!     "https://cdn.example.com/blue-train.jpg",
//! );
//!
//! assert_eq!(album.id.as_str(), "42");
//! assert!(album.has_artwork());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

pub use types::{Album, AlbumId};
