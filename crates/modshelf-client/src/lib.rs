//! Typed client for the modshelf HTTP API.
//!
//! [`client::ApiClient`] mirrors every server operation, attaches the held
//! bearer token to each request, and turns any 401 into a broadcast logout
//! signal so callers can evict their session state.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ClientError;
