//! Registry error taxonomy.

use thiserror::Error;

/// Typed failure results for registry operations.
///
/// Every failure is reported synchronously to the caller; no operation
/// returns a default value masquerading as success. The display strings
/// match the reason strings callers of the original registry relied on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Caller is not the owner")]
    NotOwner,

    #[error("Phone number already registered")]
    PhoneAlreadyRegistered(String),

    #[error("Agency already has a registered phone number")]
    AgencyAlreadyRegistered(String),

    #[error("Phone number not registered")]
    PhoneNotRegistered(String),

    #[error("Phone number not registered for this agency")]
    AgencyNotRegistered(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl RegistryError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::NotOwner => "NOT_OWNER",
            RegistryError::PhoneAlreadyRegistered(_) => "PHONE_ALREADY_REGISTERED",
            RegistryError::AgencyAlreadyRegistered(_) => "AGENCY_ALREADY_REGISTERED",
            RegistryError::PhoneNotRegistered(_) => "PHONE_NOT_REGISTERED",
            RegistryError::AgencyNotRegistered(_) => "AGENCY_NOT_REGISTERED",
            RegistryError::InvalidArgument(_) => "INVALID_ARGUMENT",
            RegistryError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(e: std::io::Error) -> Self {
        RegistryError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Storage(format!("JSON serialization error: {}", e))
    }
}
