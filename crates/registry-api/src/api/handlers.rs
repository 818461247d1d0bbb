//! HTTP request handlers.

use super::types::{
    AgencyNameResponse, AgencyPhoneResponse, HealthResponse, RegisterRequest, RegisterResponse,
    RegistrationsResponse, RevokeRequest, RevokeResponse, TransferOwnershipRequest,
    TransferOwnershipResponse, VerifyResponse,
};
use super::AppState;
use crate::error::ApiError;
use caller_registry::{Identity, RegistryEvent};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

/// Parse an agency address supplied over HTTP.
///
/// Addresses are "0x" followed by 40 hex characters. The core treats
/// identities as opaque; the format check lives here at the transport
/// boundary.
fn parse_address(value: &str) -> Result<Identity, ApiError> {
    let hex_part = value
        .strip_prefix("0x")
        .ok_or_else(|| ApiError::InvalidAddress(value.to_string()))?;

    if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ApiError::InvalidAddress(value.to_string()));
    }

    Ok(Identity::new(value))
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        registrations: registry.count(),
    })
}

/// Register a phone number for an agency. Owner-gated.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let agency = parse_address(&request.agency)?;
    info!(agency = %agency, phone_number = %request.phone_number, "Registration request received");

    let event = {
        let mut registry = state.registry.write().await;
        let event = registry.register_phone_number(
            &state.signer,
            agency,
            request.phone_number,
            request.agency_name,
        )?;
        // Persist inside the write lock so saves cannot reorder
        state.store.save(&registry).await?;
        event
    };

    let RegistryEvent::PhoneNumberRegistered {
        agency,
        phone_number,
        agency_name,
    } = event.clone()
    else {
        unreachable!("register_phone_number emits a registration event");
    };

    state.publish(event);
    info!(agency = %agency, phone_number = %phone_number, "Phone number registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            agency,
            phone_number,
            agency_name,
            message: "Phone number registered successfully".to_string(),
        }),
    ))
}

/// Revoke an agency's phone number. Owner-gated.
pub async fn revoke(
    State(state): State<AppState>,
    Json(request): Json<RevokeRequest>,
) -> Result<Json<RevokeResponse>, ApiError> {
    let agency = parse_address(&request.agency)?;
    info!(agency = %agency, "Revocation request received");

    let event = {
        let mut registry = state.registry.write().await;
        let event = registry.revoke_phone_number(&state.signer, &agency)?;
        state.store.save(&registry).await?;
        event
    };

    let RegistryEvent::PhoneNumberRevoked {
        agency,
        phone_number,
    } = event.clone()
    else {
        unreachable!("revoke_phone_number emits a revocation event");
    };

    state.publish(event);
    info!(agency = %agency, phone_number = %phone_number, "Phone number revoked");

    Ok(Json(RevokeResponse {
        agency,
        phone_number,
        message: "Phone number revoked successfully".to_string(),
    }))
}

/// Transfer registry ownership. Owner-gated.
pub async fn transfer_ownership(
    State(state): State<AppState>,
    Json(request): Json<TransferOwnershipRequest>,
) -> Result<Json<TransferOwnershipResponse>, ApiError> {
    let new_owner = parse_address(&request.new_owner)?;
    warn!(new_owner = %new_owner, "Ownership transfer request received");

    let event = {
        let mut registry = state.registry.write().await;
        let event = registry.transfer_ownership(&state.signer, new_owner)?;
        state.store.save(&registry).await?;
        event
    };

    let RegistryEvent::OwnershipTransferred {
        previous_owner,
        new_owner,
    } = event.clone()
    else {
        unreachable!("transfer_ownership emits an ownership event");
    };

    state.publish(event);
    warn!(previous_owner = %previous_owner, new_owner = %new_owner, "Ownership transferred");

    Ok(Json(TransferOwnershipResponse {
        previous_owner,
        new_owner,
        message: "Ownership transferred successfully".to_string(),
    }))
}

/// Verify whether a phone number belongs to an agency.
///
/// Never fails for unregistered pairs; the outcome is carried in `valid`.
pub async fn verify(
    State(state): State<AppState>,
    Path((agency, phone_number)): Path<(String, String)>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let agency = parse_address(&agency)?;

    let registry = state.registry.read().await;
    let valid = registry.verify_agency_phone(&agency, &phone_number);
    // Both indices are read under the same lock, so the name matches the
    // verified pair
    let agency_name = if valid {
        registry
            .get_agency_name_by_phone(&phone_number)
            .ok()
            .map(String::from)
    } else {
        None
    };

    Ok(Json(VerifyResponse {
        agency,
        phone_number,
        valid,
        agency_name,
    }))
}

/// Get the agency name bound to a phone number.
pub async fn agency_name_by_phone(
    State(state): State<AppState>,
    Path(phone_number): Path<String>,
) -> Result<Json<AgencyNameResponse>, ApiError> {
    let registry = state.registry.read().await;
    let agency_name = registry.get_agency_name_by_phone(&phone_number)?.to_string();

    Ok(Json(AgencyNameResponse {
        phone_number,
        agency_name,
    }))
}

/// Get the phone number bound to an agency.
pub async fn agency_phone(
    State(state): State<AppState>,
    Path(agency): Path<String>,
) -> Result<Json<AgencyPhoneResponse>, ApiError> {
    let agency = parse_address(&agency)?;

    let registry = state.registry.read().await;
    let phone_number = registry.get_agency_phone(&agency)?.to_string();

    Ok(Json(AgencyPhoneResponse {
        agency,
        phone_number,
    }))
}

/// List all live registrations.
pub async fn list_registrations(State(state): State<AppState>) -> Json<RegistrationsResponse> {
    let registry = state.registry.read().await;
    let registrations = registry.list();
    let total = registrations.len();

    Json(RegistrationsResponse {
        registrations,
        total,
    })
}
