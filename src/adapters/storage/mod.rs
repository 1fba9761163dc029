//! State storage adapters.

mod watch_store;

pub use watch_store::WatchStore;
