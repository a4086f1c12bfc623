//! State container: the single synchronization point for snapshots.
//!
//! Holds one [`AppState`] value behind a read-write lock. All mutation
//! goes through [`StateContainer::apply`]; every applied snapshot is
//! fanned out to subscribers so the presentation layer can re-render.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, RwLock};

use crate::store::state::{AppState, StatePatch};

/// Thread-safe container with interior mutability.
///
/// Cheap to clone; all clones share the same snapshot and subscriber
/// list.
#[derive(Clone)]
pub struct StateContainer {
    inner: Arc<RwLock<ContainerInner>>,
}

struct ContainerInner {
    state: AppState,
    subscribers: Vec<Sender<AppState>>,
}

impl StateContainer {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ContainerInner {
                state: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the current snapshot.
    pub fn get(&self) -> AppState {
        self.inner
            .read()
            .expect("state lock poisoned")
            .state
            .clone()
    }

    /// Merge a patch over the current snapshot, replacing touched
    /// top-level fields wholesale, and return the new snapshot.
    pub fn apply(&self, patch: StatePatch) -> AppState {
        self.update(move |_| patch)
    }

    /// Compute a patch from the current snapshot and apply it under a
    /// single lock acquisition, so the transition sees the snapshot
    /// current at call time.
    pub fn update(&self, transition: impl FnOnce(&AppState) -> StatePatch) -> AppState {
        let mut inner = self.inner.write().expect("state lock poisoned");
        let patch = transition(&inner.state);
        let next = inner.state.apply(patch);
        inner.state = next.clone();

        // std mpsc sends never block; a failed send means the receiver
        // is gone and the subscriber can be dropped.
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(next.clone()).is_ok());

        next
    }

    /// Register a subscriber. Every snapshot applied from now on is
    /// delivered to the returned receiver.
    pub fn subscribe(&self) -> Receiver<AppState> {
        let (tx, rx) = mpsc::channel();
        self.inner
            .write()
            .expect("state lock poisoned")
            .subscribers
            .push(tx);
        rx
    }
}

impl Default for StateContainer {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
