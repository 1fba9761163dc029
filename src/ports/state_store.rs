//! State Store Port - Observable value holders for client state.
//!
//! The session and the cached post list are held in stores that UI code can
//! subscribe to. Components receive their stores by injection, so they can be
//! exercised in tests without any UI runtime.
//!
//! Writes replace the whole value. A subscriber never sees a half-applied
//! update.

use tokio::sync::watch;

/// Holds one value, lets writers replace it and readers observe changes.
pub trait StateStore<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Returns a copy of the current value.
    fn get(&self) -> T;

    /// Replaces the value and notifies subscribers.
    fn set(&self, value: T);

    /// Mutates the value in place as one atomic step.
    ///
    /// `f` returns whether it changed anything; subscribers are only
    /// notified when it did. Returns that same flag.
    fn modify(&self, f: &mut dyn FnMut(&mut T) -> bool) -> bool;

    /// Returns a receiver that yields every subsequent value.
    fn subscribe(&self) -> watch::Receiver<T>;
}
