//! A single owner for [`CollectionState`] with change notification.
//!
//! [`CollectionStore`] is the framework-free way to share the collection state: one store holds
//! the three values, consumers read snapshots and either call the setters directly, or get an
//! [`Updater`] that can only request changes. Callbacks registered with
//! [`CollectionStore::subscribe`] see every change until their [`Subscription`] is dropped.
//!
//! Everything here is single-threaded, the same as the UI update cycle it mirrors.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::data::{CollectionAction, CollectionState};

type Listener<T> = Rc<dyn Fn(&CollectionState<T>)>;

struct Inner<T> {
    state: CollectionState<T>,
    listeners: Vec<(u64, Listener<T>)>,
    next_listener_id: u64,
    pending: VecDeque<CollectionAction<T>>,
    notifying: bool,
}

/// Ends a notification round, also when a listener panics.
struct NotifyingGuard<'a, T> {
    inner: &'a RefCell<Inner<T>>,
}

impl<T> Drop for NotifyingGuard<'_, T> {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.notifying = false;
        inner.pending.clear();
    }
}

/// Shared handle to one collection state. Clones point at the same state.
pub struct CollectionStore<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> CollectionStore<T> {
    /// A store holding [`CollectionState::default`].
    pub fn new() -> Self {
        Self::with_state(CollectionState::default())
    }

    pub fn with_state(state: CollectionState<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                listeners: Vec::new(),
                next_listener_id: 0,
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Copy of the current state. Later changes are not reflected in it.
    pub fn snapshot(&self) -> CollectionState<T> {
        self.inner.borrow().state.clone()
    }

    pub fn content(&self) -> String {
        self.inner.borrow().state.content.clone()
    }

    pub fn nfts(&self) -> Vec<T> {
        self.inner.borrow().state.nfts.clone()
    }

    pub fn active_nfts(&self) -> Vec<T> {
        self.inner.borrow().state.active_nfts.clone()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.dispatch(CollectionAction::SetContent(content.into()));
    }

    pub fn set_nfts(&self, nfts: Vec<T>) {
        self.dispatch(CollectionAction::SetNfts(nfts));
    }

    pub fn set_active_nfts(&self, active_nfts: Vec<T>) {
        self.dispatch(CollectionAction::SetActiveNfts(active_nfts));
    }

    /// Applies `action` and notifies every subscriber with the new state.
    ///
    /// Subscribers are notified on every dispatch, including ones that write the value already
    /// held. No borrow is held while they run, so they may read the store or dispatch again.
    /// A dispatch made from inside a notification is queued and applied once the current round
    /// finishes, so every subscriber sees the states in order and ends on the current one.
    /// A subscriber unsubscribed during a round is not called for the rest of it.
    pub fn dispatch(&self, action: CollectionAction<T>) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.pending.push_back(action);
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }

        let _round = NotifyingGuard { inner: &self.inner };
        loop {
            let (snapshot, ids) = {
                let mut inner = self.inner.borrow_mut();
                let Some(action) = inner.pending.pop_front() else {
                    break;
                };
                let kind = action.kind();
                inner.state.apply(action);
                tracing::debug!(
                    field = kind,
                    nfts = inner.state.nfts.len(),
                    active_nfts = inner.state.active_nfts.len(),
                    queued = inner.pending.len(),
                    "collection state replaced"
                );
                let ids: Vec<u64> = inner.listeners.iter().map(|(id, _)| *id).collect();
                (inner.state.clone(), ids)
            };

            for id in ids {
                let listener = self
                    .inner
                    .borrow()
                    .listeners
                    .iter()
                    .find(|(l, _)| *l == id)
                    .map(|(_, l)| l.clone());
                if let Some(listener) = listener {
                    listener(&snapshot);
                }
            }
        }
    }

    /// Registers `listener` to be called after every change.
    ///
    /// The listener stays registered for as long as the returned [`Subscription`] is alive.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&CollectionState<T>) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(l, _)| *l != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// A handle that can request changes but not read the state.
    pub fn updater(&self) -> Updater<T> {
        Updater {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a listener registered on a [`CollectionStore`]. Dropping it unsubscribes.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Write-only handle to a [`CollectionStore`].
///
/// It does not keep the store alive. Once every store handle is dropped, requests are ignored
/// and the methods return `false`.
pub struct Updater<T> {
    inner: Weak<RefCell<Inner<T>>>,
}

impl<T> Clone for Updater<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + 'static> Updater<T> {
    /// Forwards `action` to the store. Returns `false` if the store no longer exists.
    pub fn dispatch(&self, action: CollectionAction<T>) -> bool {
        match self.inner.upgrade() {
            Some(inner) => {
                CollectionStore { inner }.dispatch(action);
                true
            }
            None => {
                tracing::warn!(field = action.kind(), "update requested after store was dropped");
                false
            }
        }
    }

    pub fn set_content(&self, content: impl Into<String>) -> bool {
        self.dispatch(CollectionAction::SetContent(content.into()))
    }

    pub fn set_nfts(&self, nfts: Vec<T>) -> bool {
        self.dispatch(CollectionAction::SetNfts(nfts))
    }

    pub fn set_active_nfts(&self, active_nfts: Vec<T>) -> bool {
        self.dispatch(CollectionAction::SetActiveNfts(active_nfts))
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Nft;

    #[test]
    fn new_store_holds_default_state() {
        let store = CollectionStore::<Nft>::new();
        assert_eq!(store.content(), "collection");
        assert!(store.nfts().is_empty());
        assert!(store.active_nfts().is_empty());
        assert_eq!(store.snapshot(), CollectionState::default());
    }

    #[test]
    fn clones_share_state() {
        let store = CollectionStore::<&str>::new();
        let other = store.clone();
        other.set_content("gallery");
        assert_eq!(store.content(), "gallery");
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let store = CollectionStore::new();
        store.set_nfts(vec!["a"]);
        let before = store.snapshot();
        store.set_nfts(vec!["b", "c"]);
        assert_eq!(before.nfts, vec!["a"]);
        assert_eq!(store.nfts(), vec!["b", "c"]);
    }

    #[test]
    fn subscribers_see_every_change() {
        let store = CollectionStore::<&str>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _sub = {
            let seen = seen.clone();
            store.subscribe(move |state| {
                seen.borrow_mut().push(state.content.clone());
            })
        };

        store.set_content("gallery");
        store.set_content("gallery");
        store.set_nfts(vec!["nft1"]);

        assert_eq!(*seen.borrow(), vec!["gallery", "gallery", "gallery"]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let store = CollectionStore::<u32>::new();
        let calls = Rc::new(RefCell::new(0));

        let sub = {
            let calls = calls.clone();
            store.subscribe(move |_| *calls.borrow_mut() += 1)
        };
        assert_eq!(store.subscriber_count(), 1);

        store.set_nfts(vec![1]);
        drop(sub);
        store.set_nfts(vec![2]);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = CollectionStore::<u32>::new();
        let sub = store.subscribe(|_| {});
        drop(store);
        drop(sub);
    }

    #[test]
    fn listener_can_dispatch_reentrantly() {
        let store = CollectionStore::<&str>::new();

        let _mirror = {
            let store_ref = store.clone();
            store.subscribe(move |state| {
                if state.active_nfts != state.nfts {
                    store_ref.set_active_nfts(state.nfts.clone());
                }
            })
        };

        store.set_nfts(vec!["x", "y"]);
        assert_eq!(store.active_nfts(), vec!["x", "y"]);
    }

    #[test]
    fn reentrant_dispatch_leaves_every_listener_on_current_state() {
        let store = CollectionStore::<&str>::new();
        let last_seen = Rc::new(RefCell::new(Vec::new()));

        let _redirect = {
            let store_ref = store.clone();
            store.subscribe(move |state| {
                if state.content == "gallery" {
                    store_ref.set_content("featured");
                }
            })
        };
        let _recorder = {
            let last_seen = last_seen.clone();
            store.subscribe(move |state| last_seen.borrow_mut().push(state.content.clone()))
        };

        store.set_content("gallery");

        assert_eq!(store.content(), "featured");
        assert_eq!(*last_seen.borrow(), vec!["gallery", "featured"]);
        assert_eq!(last_seen.borrow().last().cloned(), Some(store.content()));
    }

    #[test]
    fn listener_unsubscribed_mid_round_is_not_called() {
        let store = CollectionStore::<u32>::new();
        let calls = Rc::new(RefCell::new(0));
        let second: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _first = {
            let second = second.clone();
            store.subscribe(move |_| drop(second.borrow_mut().take()))
        };
        *second.borrow_mut() = Some({
            let calls = calls.clone();
            store.subscribe(move |_| *calls.borrow_mut() += 1)
        });

        store.set_nfts(vec![1]);

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn panicking_listener_does_not_wedge_the_store() {
        let store = CollectionStore::<u32>::new();
        let _sub = store.subscribe(|state| {
            if state.nfts == [13] {
                panic!("unlucky");
            }
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.set_nfts(vec![13]);
        }));
        assert!(result.is_err());

        store.set_nfts(vec![7]);
        assert_eq!(store.nfts(), vec![7]);
    }

    #[test]
    fn updater_writes_through_to_store() {
        let store = CollectionStore::<&str>::new();
        let updater = store.updater();

        assert!(updater.set_content("gallery"));
        assert!(updater.set_nfts(vec!["nft1", "nft2"]));

        assert_eq!(store.content(), "gallery");
        assert_eq!(store.nfts(), vec!["nft1", "nft2"]);
        assert!(store.active_nfts().is_empty());
    }

    #[test]
    fn updater_after_store_dropped_is_inert() {
        let store = CollectionStore::<&str>::new();
        let updater = store.updater();
        assert!(updater.is_alive());

        drop(store);

        assert!(!updater.is_alive());
        assert!(!updater.set_active_nfts(vec!["late"]));
    }
}
