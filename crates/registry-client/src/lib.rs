//! Client for the government caller registry API.
//!
//! Wraps the REST endpoints in typed methods: register, revoke, verify,
//! lookups by phone or agency, ownership transfer, and listings.

mod client;
mod error;
mod types;

pub use client::RegistryClient;
pub use error::ClientError;
pub use types::*;
