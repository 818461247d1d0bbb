//! Government caller registry core.
//!
//! Maintains the phone-number-to-agency mapping behind an owner-gated API:
//! - One registration per phone number and per agency identity
//! - Both indices (phone -> name, agency -> phone) stay mutually consistent
//! - Only the owner may register, revoke, or transfer ownership

pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::RegistryError;
pub use registry::Registry;
pub use store::Store;
pub use types::{Identity, Registration, RegistryEvent};
