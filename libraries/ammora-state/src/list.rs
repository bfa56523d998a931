//! Album list screen controller.

use crate::cell::{lock, StateCell, StateSubscription};
use crate::state::{Failure, ViewState};
use ammora_client::AlbumRepository;
use ammora_core::Album;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Shown for any failed list fetch.
pub const LIST_FAILURE_MESSAGE: &str = "Could not load albums";

/// State exposed by the list screen.
pub type AlbumListState = ViewState<Vec<Album>>;

/// Loads the album list and publishes the outcome.
///
/// `activate` fetches only from `Idle`; repeated activation while loading or
/// after a result is a no-op. Use `refresh` for an explicit re-fetch.
/// Dropping the controller aborts an in-flight fetch.
pub struct AlbumListController<R: ?Sized> {
    repo: Arc<R>,
    state: Arc<StateCell<AlbumListState>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<R> AlbumListController<R>
where
    R: AlbumRepository + ?Sized + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            state: Arc::new(StateCell::new(ViewState::Idle)),
            task: Mutex::new(None),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AlbumListState {
        self.state.get()
    }

    /// Subscribe to state transitions, starting with the current state.
    pub fn subscribe(&self) -> StateSubscription<AlbumListState> {
        self.state.subscribe()
    }

    /// Start the initial fetch. Returns whether a fetch was started.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn activate(&self) -> bool {
        let mut task = lock(&self.task);
        if !self.state.set_if(ViewState::is_idle, ViewState::Loading) {
            debug!("Album list already activated");
            return false;
        }

        *task = Some(self.spawn_fetch());
        true
    }

    /// Re-fetch the list unless a fetch is already running.
    pub fn refresh(&self) -> bool {
        let mut task = lock(&self.task);
        if !self
            .state
            .set_if(|state| !state.is_loading(), ViewState::Loading)
        {
            debug!("Album list refresh ignored, fetch in flight");
            return false;
        }

        *task = Some(self.spawn_fetch());
        true
    }

    /// Callers hold the `task` lock from the state check until the handle is
    /// stored, so the stored handle is always the live fetch.
    fn spawn_fetch(&self) -> JoinHandle<()> {
        let repo = Arc::clone(&self.repo);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            info!("Loading album list");

            let next = match repo.list_albums().await {
                Ok(albums) => {
                    info!(albums = albums.len(), "Album list loaded");
                    ViewState::Loaded(albums)
                }
                Err(e) => {
                    warn!(error = %e, kind = e.kind(), "Failed to load album list");
                    ViewState::Failed(Failure::from_error(&e, LIST_FAILURE_MESSAGE))
                }
            };

            state.set(next);
        })
    }
}

impl<R: ?Sized> Drop for AlbumListController<R> {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.task).take() {
            handle.abort();
        }
    }
}
