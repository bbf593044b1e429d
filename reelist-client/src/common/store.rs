//! Observable state container shared by every store.

use std::sync::Arc;
use tokio::sync::watch;

/// Watch-backed cell holding a store's state.
///
/// Clones share the same channel. Readers take snapshots or subscribe;
/// writers mutate in place so subscribers are woken once per change.
#[derive(Debug)]
pub struct StateCell<S> {
    sender: Arc<watch::Sender<S>>,
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<S: Default> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> StateCell<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Read the current state without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Mutate and always notify
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.sender.send_modify(f);
    }

    /// Mutate and notify only when `f` reports a change
    pub fn update_if(&self, f: impl FnOnce(&mut S) -> bool) -> bool {
        self.sender.send_if_modified(f)
    }
}

impl<S: Clone> StateCell<S> {
    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }
}
