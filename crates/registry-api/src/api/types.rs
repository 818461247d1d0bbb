//! API request and response types.

use caller_registry::{Identity, Registration};
use serde::{Deserialize, Serialize};

/// Request to register a phone number for an agency.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Agency address
    pub agency: String,

    /// Phone number to register (stored exactly as supplied)
    pub phone_number: String,

    /// Display name of the agency
    pub agency_name: String,
}

/// Response after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub agency: Identity,
    pub phone_number: String,
    pub agency_name: String,
    pub message: String,
}

/// Request to revoke an agency's phone number.
#[derive(Debug, Deserialize)]
pub struct RevokeRequest {
    /// Agency address
    pub agency: String,
}

/// Response after a successful revocation.
#[derive(Debug, Serialize)]
pub struct RevokeResponse {
    pub agency: Identity,
    /// The phone number that was bound before revocation
    pub phone_number: String,
    pub message: String,
}

/// Request to transfer registry ownership.
#[derive(Debug, Deserialize)]
pub struct TransferOwnershipRequest {
    /// Address of the new owner
    pub new_owner: String,
}

/// Response after an ownership transfer.
#[derive(Debug, Serialize)]
pub struct TransferOwnershipResponse {
    pub previous_owner: Identity,
    pub new_owner: Identity,
    pub message: String,
}

/// Verification outcome for an (agency, phone number) pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub agency: Identity,
    pub phone_number: String,
    /// True iff the phone number is registered to exactly this agency
    pub valid: bool,
    /// Agency display name, resolved only when the pair is valid
    pub agency_name: Option<String>,
}

/// Agency name lookup result.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgencyNameResponse {
    pub phone_number: String,
    pub agency_name: String,
}

/// Agency phone lookup result.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgencyPhoneResponse {
    pub agency: Identity,
    pub phone_number: String,
}

/// List of live registrations.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegistrationsResponse {
    pub registrations: Vec<Registration>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub registrations: usize,
}
