//! Ammora State
//!
//! Screen-level state controllers for the Ammora music browser.
//!
//! A controller owns one [`StateCell`] holding a [`ViewState`]
//! (`Idle`, `Loading`, `Loaded`, `Failed`), performs its fetch on a Tokio
//! task and publishes every transition to subscribers. Presenters never
//! block on a fetch: they subscribe and render whatever arrives.
//!
//! - [`AlbumListController`] loads the album list once per activation.
//! - [`AlbumDetailController`] loads one album per `load(id)` call and drops
//!   responses that belong to a superseded request.
//!
//! # Example
//!
//! ```ignore
//! use ammora_client::{ClientConfig, MusicApiClient};
//! use ammora_state::AlbumListController;
//! use std::sync::Arc;
//!
//! let client = Arc::new(MusicApiClient::new(ClientConfig::default())?);
//! let list = AlbumListController::new(Arc::clone(&client));
//!
//! let mut updates = list.subscribe();
//! list.activate();
//!
//! while let Some(state) = updates.next().await {
//!     println!("{:?}", state);
//!     if state.is_settled() {
//!         break;
//!     }
//! }
//! ```

mod cell;
mod detail;
mod list;
mod state;

pub use cell::{StateCell, StateSubscription};
pub use detail::{AlbumDetailController, AlbumDetailState, DETAIL_FAILURE_MESSAGE};
pub use list::{AlbumListController, AlbumListState, LIST_FAILURE_MESSAGE};
pub use state::{Failure, FailureKind, ViewState};
