//! Observable store that owns a registry and notifies subscribers after each
//! mutation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::command::{apply, RegistryEffect, RegistryError, WindowCommand};
use crate::registry::WindowRegistry;

/// Handle returned by [`RegistryStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber<P> = Rc<dyn Fn(&WindowRegistry<P>)>;

struct StoreInner<P> {
    registry: WindowRegistry<P>,
    subscribers: Vec<(u64, Subscriber<P>)>,
    next_subscription: u64,
}

/// Shared single-threaded handle to a [`WindowRegistry`] plus its observers.
///
/// Cloning the handle shares the same store. Dispatching a command mutates
/// the registry and then notifies every subscriber synchronously, in
/// subscription order, with a snapshot taken after the mutation completed —
/// observers never see a partially-applied command. Commands that change
/// nothing (the focus short-circuit) and commands that fail notify nobody.
pub struct RegistryStore<P> {
    inner: Rc<RefCell<StoreInner<P>>>,
}

impl<P> Clone for RegistryStore<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P> Default for RegistryStore<P> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                registry: WindowRegistry::default(),
                subscribers: Vec::new(),
                next_subscription: 1,
            })),
        }
    }
}

impl<P: Clone + PartialEq> RegistryStore<P> {
    /// Creates a store around an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a command and notifies subscribers when state changed.
    ///
    /// Notification happens after the mutable borrow is released, so a
    /// subscriber may read the store (or dispatch) without re-entrancy
    /// panics.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError`] from [`apply`]; the registry is unchanged
    /// and no subscriber runs on failure.
    pub fn dispatch(
        &self,
        command: WindowCommand<P>,
    ) -> Result<Vec<RegistryEffect>, RegistryError> {
        let (snapshot, effects) = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.registry.clone();
            let effects = apply(&mut inner.registry, command)?;
            if inner.registry == before {
                return Ok(effects);
            }
            (inner.registry.clone(), effects)
        };

        let subscribers: Vec<Subscriber<P>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }

        Ok(effects)
    }

    /// Registers an observer called after every state-changing dispatch.
    pub fn subscribe(&self, subscriber: impl Fn(&WindowRegistry<P>) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        SubscriptionId(id)
    }

    /// Removes an observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Returns a clone of the current registry state.
    pub fn snapshot(&self) -> WindowRegistry<P> {
        self.inner.borrow().registry.clone()
    }

    /// Reads the current registry state without cloning it.
    pub fn with<R>(&self, read: impl FnOnce(&WindowRegistry<P>) -> R) -> R {
        read(&self.inner.borrow().registry)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{OpenWindowRequest, WindowId};

    fn open_command(id: &str) -> WindowCommand<()> {
        WindowCommand::Open(OpenWindowRequest::new(id, id.to_uppercase(), ()))
    }

    #[test]
    fn subscriber_sees_the_updated_registry_synchronously() {
        let store = RegistryStore::<()>::new();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        store.subscribe(move |registry| {
            sink.borrow_mut()
                .push((registry.len(), registry.focused_window_id().cloned()));
        });

        store.dispatch(open_command("notes")).expect("open");
        store.dispatch(open_command("messages")).expect("open");

        assert_eq!(
            *observed.borrow(),
            vec![
                (1, Some(WindowId::new("notes"))),
                (2, Some(WindowId::new("messages"))),
            ]
        );
    }

    #[test]
    fn focus_short_circuit_notifies_nobody() {
        let store = RegistryStore::<()>::new();
        store.dispatch(open_command("notes")).expect("open");

        let notifications = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&notifications);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store
            .dispatch(WindowCommand::Focus {
                id: WindowId::new("notes"),
            })
            .expect("focus focused window");

        assert_eq!(*notifications.borrow(), 0);
    }

    #[test]
    fn failed_commands_notify_nobody_and_change_nothing() {
        let store = RegistryStore::<()>::new();
        store.dispatch(open_command("notes")).expect("open");
        let before = store.snapshot();

        let notifications = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&notifications);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        let result = store.dispatch(WindowCommand::Close {
            id: WindowId::new("ghost"),
        });

        assert_eq!(result, Err(RegistryError::WindowNotFound));
        assert_eq!(store.snapshot(), before);
        assert_eq!(*notifications.borrow(), 0);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = RegistryStore::<()>::new();
        let notifications = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&notifications);
        let subscription = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.dispatch(open_command("a")).expect("open");
        store.unsubscribe(subscription);
        store.dispatch(open_command("b")).expect("open");

        assert_eq!(*notifications.borrow(), 1);
    }

    #[test]
    fn subscriber_may_read_the_store_during_notification() {
        let store = RegistryStore::<()>::new();
        let lens = store.clone();
        let observed = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&observed);
        store.subscribe(move |_| {
            *sink.borrow_mut() = lens.with(|registry| registry.len());
        });

        store.dispatch(open_command("a")).expect("open");

        assert_eq!(*observed.borrow(), 1);
    }

    #[test]
    fn clones_share_one_registry() {
        let store = RegistryStore::<()>::new();
        let alias = store.clone();
        alias.dispatch(open_command("a")).expect("open");

        assert_eq!(store.snapshot().len(), 1);
    }
}
