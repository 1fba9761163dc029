//! HTTP adapters - transports that talk to the Postboard API.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
