//! Postboard Client - Data access layer for the Postboard social posting API
//!
//! This crate issues requests to the Postboard HTTP API, normalizes responses
//! and errors, and keeps observable client state (session, post listing) in
//! step with the server.

pub mod adapters;
pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use application::{ApiResponse, RequestExecutor, RequestOptions};
pub use client::PostboardClient;
pub use domain::foundation::{ApiError, CommentId, ErrorEnvelope, PostId, TransportError};
