//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the client's components and the outside world. Adapters implement these
//! ports.
//!
//! - `HttpTransport` - Sends requests to the API server
//! - `StateStore` - Observable holder for session and post state

mod http_transport;
mod state_store;

pub use http_transport::{HttpMethod, HttpTransport, TransportRequest, TransportResponse};
pub use state_store::StateStore;
