//! Government caller registry REST API.
//!
//! Thin HTTP layer over the [`caller_registry`] core:
//! - Mutating routes act on behalf of the configured signer identity
//! - All writes go through a single write lock and are persisted before
//!   the response is sent
//! - Successful mutations publish a [`caller_registry::RegistryEvent`] to
//!   subscribed observers

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::ApiError;
