// SPDX-License-Identifier: MPL-2.0
//! The notification store: the ordered set of live toasts.
//!
//! All mutation goes through [`Store::create`], [`Store::remove`] and
//! [`Store::clear`]. Each of them commits the change first and then notifies
//! every listener synchronously, in subscription order, with the full snapshot.
//! No internal borrow is held while listeners run, so a listener may call back
//! into the store; the nested mutation notifies on its own before the outer
//! fan-out continues.
//!
//! The store is single-threaded. Clone the handle to share it; every clone
//! refers to the same live set.

use super::entry::{Content, Draft, Toast, ToastId};
use super::kind::Kind;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Instant;

/// Callback receiving the live set after every mutation.
pub type Listener<C> = Rc<dyn Fn(&[Rc<Toast<C>>])>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Inner<C> {
    toasts: RefCell<Vec<Rc<Toast<C>>>>,
    listeners: RefCell<Vec<(ListenerId, Listener<C>)>>,
    next_toast: Cell<u64>,
    next_listener: Cell<u64>,
}

impl<C> Inner<C> {
    fn notify(&self) {
        let listeners: Vec<Listener<C>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        // A fresh snapshot per listener: an earlier listener may have mutated
        // the store, and the last snapshot anyone sees must be the current one.
        for listener in listeners {
            let snapshot: Vec<Rc<Toast<C>>> = self.toasts.borrow().clone();
            listener(snapshot.as_slice());
        }
    }
}

trait Unsubscribe {
    fn unsubscribe(&self, id: ListenerId);
}

impl<C> Unsubscribe for Inner<C> {
    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(other, _)| *other != id);
    }
}

/// Handle to a shared, ordered set of live toasts.
pub struct Store<C = ()> {
    inner: Rc<Inner<C>>,
}

impl<C> Clone for Store<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> Default for Store<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Store<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("toasts", &self.inner.toasts.borrow().len())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl<C> Store<C> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                toasts: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
                next_toast: Cell::new(0),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Appends a new toast and notifies listeners before returning its id.
    pub fn create(&self, draft: Draft<C>) -> ToastId {
        let id = ToastId::from_raw(self.inner.next_toast.get());
        self.inner.next_toast.set(id.get() + 1);

        let kind = draft.kind();
        self.inner
            .toasts
            .borrow_mut()
            .push(Rc::new(draft.into_toast(id, Instant::now())));
        log::debug!("toast {id} created ({kind})");

        self.inner.notify();
        id
    }

    /// Removes a toast, keeping the order of the others.
    ///
    /// Unknown ids leave the live set untouched. Listeners are notified either
    /// way. Returns whether a toast was removed.
    pub fn remove(&self, id: ToastId) -> bool {
        let removed = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let before = toasts.len();
            toasts.retain(|toast| toast.id() != id);
            toasts.len() != before
        };
        if removed {
            log::debug!("toast {id} removed");
        } else {
            log::trace!("toast {id} already gone");
        }

        self.inner.notify();
        removed
    }

    /// Removes every toast with a single notification.
    pub fn clear(&self) {
        let count = {
            let mut toasts = self.inner.toasts.borrow_mut();
            let count = toasts.len();
            toasts.clear();
            count
        };
        log::debug!("cleared {count} toasts");

        self.inner.notify();
    }

    /// Registers a listener for future mutations.
    ///
    /// The current state is not replayed. The listener stays registered until
    /// the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&[Rc<Toast<C>>]) + 'static) -> Subscription
    where
        C: 'static,
    {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let registry: Rc<dyn Unsubscribe> = self.inner.clone();
        Subscription {
            registry: Rc::downgrade(&registry),
            id,
        }
    }

    /// Snapshot of the live set, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Rc<Toast<C>>> {
        self.inner.toasts.borrow().clone()
    }

    /// Looks up a live toast.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<Rc<Toast<C>>> {
        self.inner
            .toasts
            .borrow()
            .iter()
            .find(|toast| toast.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.inner.toasts.borrow().iter().any(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.toasts.borrow().is_empty()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Weak handle that does not keep the store alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakStore<C> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Creates a toast of the given kind.
    pub fn notify_kind(&self, kind: Kind, content: impl Into<Content<C>>) -> ToastId {
        self.create(Draft::new(kind, content))
    }

    /// Creates a default toast.
    pub fn toast(&self, content: impl Into<Content<C>>) -> ToastId {
        self.notify_kind(Kind::Default, content)
    }

    pub fn success(&self, content: impl Into<Content<C>>) -> ToastId {
        self.notify_kind(Kind::Success, content)
    }

    pub fn error(&self, content: impl Into<Content<C>>) -> ToastId {
        self.notify_kind(Kind::Error, content)
    }

    pub fn warning(&self, content: impl Into<Content<C>>) -> ToastId {
        self.notify_kind(Kind::Warning, content)
    }

    pub fn info(&self, content: impl Into<Content<C>>) -> ToastId {
        self.notify_kind(Kind::Info, content)
    }

    /// Creates a caller-rendered toast.
    pub fn custom(&self, block: C) -> ToastId {
        self.create(Draft::custom(block))
    }
}

/// Non-owning handle to a [`Store`].
pub struct WeakStore<C = ()> {
    inner: Weak<Inner<C>>,
}

impl<C> Clone for WeakStore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<C> WeakStore<C> {
    /// Returns the store if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Store<C>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}

/// Registration of a store listener.
///
/// Dropping it deregisters the listener.
#[must_use = "dropping a Subscription deregisters its listener"]
pub struct Subscription {
    registry: Weak<dyn Unsubscribe>,
    id: ListenerId,
}

impl Subscription {
    /// Deregisters the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unsubscribe(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.0)
            .finish_non_exhaustive()
    }
}
