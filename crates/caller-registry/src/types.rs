//! Core registry types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque principal used for authorization and as an index key.
///
/// Typically an account-address-style string (e.g. "0xf39F..."). The core
/// compares identities by exact byte equality and performs no normalization;
/// format validation is a transport-layer concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Create a new identity from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identity string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A live binding between an agency identity and a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Identity of the registered agency
    pub agency: Identity,

    /// Phone number, stored exactly as registered
    pub phone_number: String,

    /// Display name of the agency (e.g. "Department of Example")
    pub agency_name: String,
}

/// Domain event emitted on a successful registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A phone number was bound to an agency.
    PhoneNumberRegistered {
        agency: Identity,
        phone_number: String,
        agency_name: String,
    },
    /// An agency's registration was removed.
    PhoneNumberRevoked {
        agency: Identity,
        phone_number: String,
    },
    /// Registry ownership changed hands.
    OwnershipTransferred {
        previous_owner: Identity,
        new_owner: Identity,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality_is_exact() {
        let a = Identity::new("0xAgency1");
        let b = Identity::new("0xAgency1");
        let c = Identity::new("0xagency1");

        assert_eq!(a, b);
        assert_ne!(a, c); // No case folding
    }

    #[test]
    fn test_identity_serializes_as_plain_string() {
        let id = Identity::new("0xAgency1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0xAgency1\"");

        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = RegistryEvent::PhoneNumberRevoked {
            agency: Identity::new("0xAgency1"),
            phone_number: "+61000000".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "phone_number_revoked");
        assert_eq!(json["phone_number"], "+61000000");
    }
}
