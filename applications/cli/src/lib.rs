//! Ammora CLI - terminal presenter for the album catalog.
//!
//! Subscribes to the state controllers and prints every state they publish.

pub mod config;
pub mod error;
pub mod render;

pub use config::AppConfig;
pub use error::{CliError, Result};
