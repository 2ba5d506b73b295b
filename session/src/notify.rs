//! Same-document "session changed" announcements.
//!
//! DESIGN
//! ======
//! Listeners receive no payload on purpose: sender and receiver may come from
//! different bundles, so the only trustworthy state is the store itself and
//! every listener re-reads it. The [`AuthChanged`] value is still attached to
//! the browser event (versioned) for diagnostics and future consumers.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// Why the session changed. Advisory only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeReason {
    Login,
    Logout,
    ProfileUpdated,
    PendingSignup,
}

/// Versioned detail carried by the `auth:changed` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChanged {
    pub v: u8,
    pub reason: ChangeReason,
}

impl AuthChanged {
    pub const VERSION: u8 = 1;

    #[must_use]
    pub fn new(reason: ChangeReason) -> Self {
        Self { v: Self::VERSION, reason }
    }
}

/// Callback invoked when the session may have changed.
pub type Listener = Rc<dyn Fn()>;

/// Registration handle. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription with nothing to release (listener never registered).
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Keep the listener registered for the lifetime of the page.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

/// Same-document broadcast channel.
pub trait ChangeChannel {
    /// Broadcast a change. Callers must finish their store writes first.
    fn announce(&self, event: AuthChanged);

    fn subscribe(&self, listener: Listener) -> Subscription;
}

// =============================================================================
// LISTENER SET
// =============================================================================

struct Slots<L> {
    next_id: u64,
    entries: Vec<(u64, L)>,
}

/// Registry shared by the in-process channels.
///
/// Dispatch iterates over a snapshot and re-checks membership before each
/// call, so listeners may subscribe or unsubscribe from inside a callback.
pub(crate) struct ListenerSet<L> {
    slots: Rc<RefCell<Slots<L>>>,
}

impl<L> Clone for ListenerSet<L> {
    fn clone(&self) -> Self {
        Self { slots: Rc::clone(&self.slots) }
    }
}

impl<L> Default for ListenerSet<L> {
    fn default() -> Self {
        Self { slots: Rc::new(RefCell::new(Slots { next_id: 0, entries: Vec::new() })) }
    }
}

impl<L: Clone + 'static> ListenerSet<L> {
    pub(crate) fn insert(&self, listener: L) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, listener));
            id
        };
        let weak: Weak<RefCell<Slots<L>>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = weak.upgrade() {
                slots.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    pub(crate) fn dispatch(&self, mut call: impl FnMut(&L)) {
        let snapshot: Vec<(u64, L)> = self.slots.borrow().entries.clone();
        for (id, listener) in snapshot {
            let live = self.slots.borrow().entries.iter().any(|(entry_id, _)| *entry_id == id);
            if live {
                call(&listener);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }
}

// =============================================================================
// LOCAL CHANNEL
// =============================================================================

/// In-process [`ChangeChannel`]. Clones share listeners.
#[derive(Clone, Default)]
pub struct LocalChannel {
    listeners: ListenerSet<Listener>,
    announced: Rc<RefCell<Vec<AuthChanged>>>,
}

impl LocalChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Every event announced so far, oldest first.
    #[must_use]
    pub fn announced(&self) -> Vec<AuthChanged> {
        self.announced.borrow().clone()
    }
}

impl ChangeChannel for LocalChannel {
    fn announce(&self, event: AuthChanged) {
        log::debug!("session change announced: {:?}", event.reason);
        self.announced.borrow_mut().push(event);
        self.listeners.dispatch(|listener| listener());
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.insert(listener)
    }
}
