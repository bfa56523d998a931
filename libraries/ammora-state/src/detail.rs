//! Album detail screen controller.

use crate::cell::{lock, StateCell, StateSubscription};
use crate::state::{Failure, ViewState};
use ammora_client::AlbumRepository;
use ammora_core::{Album, AlbumId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Shown for any failed detail fetch.
pub const DETAIL_FAILURE_MESSAGE: &str = "Could not load the album";

/// State exposed by the detail screen.
pub type AlbumDetailState = ViewState<Album>;

#[derive(Default)]
struct InFlight {
    id: Option<AlbumId>,
    handle: Option<JoinHandle<()>>,
}

/// Loads single albums and publishes the outcome.
///
/// Every `load` starts a new request generation. A response is applied only
/// if its generation is still the latest when it arrives, so a slow answer
/// for a previous id can never overwrite a newer one. The superseded task
/// is aborted as well, and dropping the controller aborts whatever is still
/// running.
pub struct AlbumDetailController<R: ?Sized> {
    repo: Arc<R>,
    state: Arc<StateCell<AlbumDetailState>>,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<InFlight>,
}

impl<R> AlbumDetailController<R>
where
    R: AlbumRepository + ?Sized + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            state: Arc::new(StateCell::new(ViewState::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(InFlight::default()),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AlbumDetailState {
        self.state.get()
    }

    /// Subscribe to state transitions, starting with the current state.
    pub fn subscribe(&self) -> StateSubscription<AlbumDetailState> {
        self.state.subscribe()
    }

    /// Id of the most recent `load`, if any.
    pub fn current_id(&self) -> Option<AlbumId> {
        lock(&self.in_flight).id.clone()
    }

    /// Generation of the most recent `load` (0 before the first one).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Fetch `id`, always re-entering `Loading`. Returns the new generation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn load(&self, id: impl Into<AlbumId>) -> u64 {
        let id = id.into();
        let mut in_flight = lock(&self.in_flight);

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = in_flight.handle.take() {
            previous.abort();
        }
        self.state.set(ViewState::Loading);

        let repo = Arc::clone(&self.repo);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);
        let task_id = id.clone();

        let handle = tokio::spawn(async move {
            info!(album_id = %task_id, generation, "Loading album");

            let next = match repo.get_album(&task_id).await {
                Ok(album) => {
                    info!(album_id = %task_id, generation, "Album loaded");
                    ViewState::Loaded(album)
                }
                Err(e) => {
                    warn!(
                        album_id = %task_id,
                        generation,
                        error = %e,
                        kind = e.kind(),
                        "Failed to load album"
                    );
                    ViewState::Failed(Failure::from_error(&e, DETAIL_FAILURE_MESSAGE))
                }
            };

            // Compared under the cell lock so a concurrent load cannot slip in
            // between the check and the write.
            let applied =
                state.update(|_| (latest.load(Ordering::SeqCst) == generation).then_some(next));
            if !applied {
                debug!(album_id = %task_id, generation, "Discarding stale album response");
            }
        });

        in_flight.id = Some(id);
        in_flight.handle = Some(handle);
        generation
    }
}

impl<R: ?Sized> Drop for AlbumDetailController<R> {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.in_flight).handle.take() {
            handle.abort();
        }
    }
}
