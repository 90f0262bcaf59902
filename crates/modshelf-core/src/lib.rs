//! Shared ambient utilities for the modshelf workspace: health endpoints,
//! timestamp serialization, tracing setup, and request-id middleware.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
