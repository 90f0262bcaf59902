//! Bearer-token types shared between the api service (issuer) and any consumer
//! that needs to validate tokens or extract the caller's identity.

pub mod identity;
pub mod token;
