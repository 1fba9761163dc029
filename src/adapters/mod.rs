//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the client to external systems:
//! - `http` - reqwest transport for the Postboard API
//! - `storage` - observable in-memory state stores

pub mod http;
pub mod storage;

pub use http::ReqwestTransport;
pub use storage::WatchStore;
