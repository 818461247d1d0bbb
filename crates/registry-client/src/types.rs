//! Wire types for the registry API.

use serde::{Deserialize, Serialize};

/// Body for the register endpoint.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub agency: String,
    pub phone_number: String,
    pub agency_name: String,
}

/// A confirmed registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationAck {
    pub agency: String,
    pub phone_number: String,
    pub agency_name: String,
}

/// Body for the revoke endpoint.
#[derive(Debug, Serialize)]
pub struct RevokeRequest {
    pub agency: String,
}

/// A confirmed revocation, reporting the phone number that was bound.
#[derive(Debug, Clone, Deserialize)]
pub struct RevocationAck {
    pub agency: String,
    pub phone_number: String,
}

/// Body for the ownership transfer endpoint.
#[derive(Debug, Serialize)]
pub struct TransferOwnershipRequest {
    pub new_owner: String,
}

/// A confirmed ownership transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnershipAck {
    pub previous_owner: String,
    pub new_owner: String,
}

/// Verification outcome for an (agency, phone number) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOutcome {
    pub agency: String,
    pub phone_number: String,
    /// True iff the phone number is registered to exactly this agency
    pub valid: bool,
    /// Agency display name, present only when the pair is valid
    pub agency_name: Option<String>,
}

/// Agency name lookup result.
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyName {
    pub phone_number: String,
    pub agency_name: String,
}

/// Agency phone lookup result.
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyPhone {
    pub agency: String,
    pub phone_number: String,
}

/// One entry in the registration listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationEntry {
    pub agency: String,
    pub phone_number: String,
    pub agency_name: String,
}

/// Registration listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Registrations {
    pub registrations: Vec<RegistrationEntry>,
    pub total: usize,
}

/// Health check result.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub registrations: usize,
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    pub code: String,
}
