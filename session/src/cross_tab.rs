//! Storage mutations made by other tabs of the same origin.
//!
//! The browser only delivers `storage` events to documents other than the
//! writer, which is why the same-document [`crate::notify`] channel exists.

#[cfg(test)]
#[path = "cross_tab_test.rs"]
mod cross_tab_test;

use std::rc::Rc;

use crate::notify::{Listener, ListenerSet, Subscription};
use crate::{TOKEN_KEY, USER_KEY};

/// Raw storage-change callback. `None` means the whole storage was cleared.
pub type KeyListener = Rc<dyn Fn(Option<&str>)>;

/// Source of storage mutation notifications from other documents.
pub trait StorageEvents {
    fn subscribe_raw(&self, listener: KeyListener) -> Subscription;
}

/// Whether a mutated key can change the session.
#[must_use]
pub fn is_session_key(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == TOKEN_KEY || key == USER_KEY,
    }
}

/// Subscribe `listener` to mutations of the session keys only.
pub fn watch_session_keys(events: &dyn StorageEvents, listener: Listener) -> Subscription {
    events.subscribe_raw(Rc::new(move |key: Option<&str>| {
        if is_session_key(key) {
            listener();
        } else {
            log::trace!("ignoring storage change for unrelated key {key:?}");
        }
    }))
}

/// In-process stand-in for other tabs writing to shared storage.
#[derive(Clone, Default)]
pub struct SimulatedTabs {
    listeners: ListenerSet<KeyListener>,
}

impl SimulatedTabs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a storage event for `key` as another tab's write would.
    pub fn emit(&self, key: Option<&str>) {
        self.listeners.dispatch(|listener| listener(key));
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl StorageEvents for SimulatedTabs {
    fn subscribe_raw(&self, listener: KeyListener) -> Subscription {
        self.listeners.insert(listener)
    }
}
