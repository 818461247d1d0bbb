//! Registry API HTTP client.

use crate::error::ClientError;
use crate::types::*;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, instrument};
use urlencoding::encode;

/// Client for the registry REST API.
#[derive(Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a new client for the given base URL (e.g.
    /// "http://localhost:3001").
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Decode a response, mapping non-success statuses to typed API errors.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ClientError> {
        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&message) {
            Ok(body) => Err(ClientError::Api {
                code: body.code,
                message: body.error,
            }),
            Err(_) => Err(ClientError::Api {
                code: status.as_str().to_string(),
                message,
            }),
        }
    }

    /// Check if the API is healthy.
    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Register a phone number for an agency.
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        agency: &str,
        phone_number: &str,
        agency_name: &str,
    ) -> Result<RegistrationAck, ClientError> {
        let request = RegisterRequest {
            agency: agency.to_string(),
            phone_number: phone_number.to_string(),
            agency_name: agency_name.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/register", self.base_url))
            .json(&request)
            .send()
            .await?;

        let ack: RegistrationAck = Self::decode(response).await?;
        debug!("Registered {} for {}", ack.phone_number, ack.agency);
        Ok(ack)
    }

    /// Revoke an agency's phone number.
    #[instrument(skip(self))]
    pub async fn revoke(&self, agency: &str) -> Result<RevocationAck, ClientError> {
        let request = RevokeRequest {
            agency: agency.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/revoke", self.base_url))
            .json(&request)
            .send()
            .await?;

        let ack: RevocationAck = Self::decode(response).await?;
        debug!("Revoked {} from {}", ack.phone_number, ack.agency);
        Ok(ack)
    }

    /// Verify whether a phone number belongs to an agency.
    #[instrument(skip(self))]
    pub async fn verify(
        &self,
        agency: &str,
        phone_number: &str,
    ) -> Result<VerifyOutcome, ClientError> {
        let response = self
            .client
            .get(format!(
                "{}/api/verify/{}/{}",
                self.base_url,
                encode(agency),
                encode(phone_number)
            ))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Get the agency name bound to a phone number.
    #[instrument(skip(self))]
    pub async fn agency_name_by_phone(
        &self,
        phone_number: &str,
    ) -> Result<AgencyName, ClientError> {
        let response = self
            .client
            .get(format!(
                "{}/api/agency/{}",
                self.base_url,
                encode(phone_number)
            ))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Get the phone number bound to an agency.
    #[instrument(skip(self))]
    pub async fn agency_phone(&self, agency: &str) -> Result<AgencyPhone, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/phone/{}", self.base_url, encode(agency)))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Transfer registry ownership to a new identity.
    #[instrument(skip(self))]
    pub async fn transfer_ownership(
        &self,
        new_owner: &str,
    ) -> Result<OwnershipAck, ClientError> {
        let request = TransferOwnershipRequest {
            new_owner: new_owner.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/transfer-ownership", self.base_url))
            .json(&request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// List all live registrations.
    pub async fn registrations(&self) -> Result<Registrations, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/registrations", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }
}
