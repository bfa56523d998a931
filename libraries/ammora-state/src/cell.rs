//! Publish-subscribe state value.

use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

/// Transitions buffered per subscriber before it starts skipping.
/// Must match the figure in the `StateSubscription` docs.
const CHANNEL_CAPACITY: usize = 64;

/// A state value that publishes every transition.
///
/// Transitions are sent while the value lock is held, so a new subscriber
/// sees exactly the current value followed by every later transition, in
/// order, with nothing missed or duplicated.
pub struct StateCell<S> {
    value: Mutex<S>,
    tx: broadcast::Sender<S>,
}

impl<S: Clone> StateCell<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            value: Mutex::new(initial),
            tx,
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> S {
        lock(&self.value).clone()
    }

    /// Replace the value unconditionally.
    pub fn set(&self, next: S) {
        let mut value = lock(&self.value);
        *value = next.clone();
        // No receivers is fine: nobody is watching yet.
        let _ = self.tx.send(next);
    }

    /// Replace the value only if `pred` holds for the current one.
    ///
    /// Check and replace happen under one lock.
    pub fn set_if(&self, pred: impl FnOnce(&S) -> bool, next: S) -> bool {
        self.update(|current| pred(current).then_some(next))
    }

    /// Compute the next value from the current one; `None` leaves it as is.
    pub fn update(&self, f: impl FnOnce(&S) -> Option<S>) -> bool {
        let mut value = lock(&self.value);
        match f(&*value) {
            Some(next) => {
                *value = next.clone();
                let _ = self.tx.send(next);
                true
            }
            None => false,
        }
    }

    /// Subscribe to this cell. The first item is the current value.
    pub fn subscribe(&self) -> StateSubscription<S> {
        let value = lock(&self.value);
        StateSubscription {
            pending: Some(value.clone()),
            rx: self.tx.subscribe(),
        }
    }
}

impl<S: Clone + Default> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Ordered stream of a [`StateCell`]'s values.
///
/// Values always arrive in order. A subscriber that falls more than 64
/// transitions behind loses the oldest intermediate ones: it resumes at the
/// oldest value still buffered, and the skip is logged. The latest value is
/// never lost.
pub struct StateSubscription<S> {
    pending: Option<S>,
    rx: broadcast::Receiver<S>,
}

impl<S: Clone> StateSubscription<S> {
    /// Next value, or `None` once the cell has been dropped.
    pub async fn next(&mut self) -> Option<S> {
        if let Some(current) = self.pending.take() {
            return Some(current);
        }

        loop {
            match self.rx.recv().await {
                Ok(state) => return Some(state),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "State subscriber fell behind, skipping transitions");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Wait for the first value matching `pred`.
    pub async fn wait_for(&mut self, mut pred: impl FnMut(&S) -> bool) -> Option<S> {
        while let Some(state) = self.next().await {
            if pred(&state) {
                return Some(state);
            }
        }
        None
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
