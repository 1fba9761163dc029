//! In-Memory State Store Adapter
//!
//! Holds a value in a `tokio::sync::watch` channel. Every write replaces the
//! value as one step, and subscribers always see a complete value.

use tokio::sync::watch;

use crate::ports::StateStore;

/// Observable in-memory value
#[derive(Debug)]
pub struct WatchStore<T> {
    sender: watch::Sender<T>,
}

impl<T> WatchStore<T> {
    /// Create a store holding `initial`
    pub fn new(initial: T) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }
}

impl<T: Default> Default for WatchStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> StateStore<T> for WatchStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    fn modify(&self, f: &mut dyn FnMut(&mut T) -> bool) -> bool {
        self.sender.send_if_modified(|value| f(value))
    }

    fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Session, UserRef};

    #[test]
    fn starts_with_initial_value() {
        let store = WatchStore::new(vec![1, 2, 3]);
        assert_eq!(store.get(), vec![1, 2, 3]);
    }

    #[test]
    fn default_session_store_is_unauthenticated() {
        let store: WatchStore<Session> = WatchStore::default();
        assert_eq!(store.get(), Session::unauthenticated());
    }

    #[test]
    fn set_works_without_subscribers() {
        let store = WatchStore::new(0u32);
        store.set(7);
        assert_eq!(store.get(), 7);
    }

    #[tokio::test]
    async fn subscribers_see_replacements() {
        let store = WatchStore::new(Session::unauthenticated());
        let mut receiver = store.subscribe();

        store.set(Session::authenticated(Some(UserRef::new("alice"))));

        receiver.changed().await.unwrap();
        let seen = receiver.borrow_and_update().clone();
        assert!(seen.authenticated);
        assert_eq!(seen.user, Some(UserRef::new("alice")));
    }

    #[tokio::test]
    async fn unchanged_modify_does_not_notify() {
        let store = WatchStore::new(5u32);
        let mut receiver = store.subscribe();

        let changed = store.modify(&mut |value| {
            if *value == 5 {
                return false;
            }
            *value = 5;
            true
        });

        assert!(!changed);
        assert!(!receiver.has_changed().unwrap());

        assert!(store.modify(&mut |value| {
            *value += 1;
            true
        }));
        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), 6);
    }
}
