//! API error types and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use caller_registry::RegistryError;
use serde::Serialize;
use thiserror::Error;

/// API-level error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(e) => match e {
                RegistryError::NotOwner => StatusCode::FORBIDDEN,
                RegistryError::PhoneAlreadyRegistered(_)
                | RegistryError::AgencyAlreadyRegistered(_) => StatusCode::CONFLICT,
                RegistryError::PhoneNotRegistered(_) | RegistryError::AgencyNotRegistered(_) => {
                    StatusCode::NOT_FOUND
                }
                RegistryError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Registry(e) => e.code(),
            ApiError::InvalidAddress(_) => "INVALID_ADDRESS",
            ApiError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Registry(RegistryError::NotOwner).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Registry(RegistryError::PhoneAlreadyRegistered("+61".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Registry(RegistryError::AgencyNotRegistered("0x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidAddress("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RateLimitExceeded.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_code_passthrough() {
        assert_eq!(ApiError::Registry(RegistryError::NotOwner).code(), "NOT_OWNER");
        assert_eq!(ApiError::InvalidAddress("x".into()).code(), "INVALID_ADDRESS");
    }
}
