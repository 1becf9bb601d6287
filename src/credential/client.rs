use super::token::{Credential, TokenRequest};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CredentialFetchError {
    #[error("credential request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("credential endpoint returned HTTP {0}")]
    Status(u16),

    #[error("credential response has no token")]
    MissingToken,
}

/// Source of session credentials
#[async_trait::async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn fetch(&self, request: &TokenRequest) -> Result<Credential, CredentialFetchError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: Option<String>,
}

/// Fetches credentials from `GET <endpoint>/get-token?identity=..&room=..&model=..`
pub struct HttpCredentialClient {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpCredentialClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}/get-token", self.endpoint)
    }
}

#[async_trait::async_trait]
impl CredentialProvider for HttpCredentialClient {
    async fn fetch(&self, request: &TokenRequest) -> Result<Credential, CredentialFetchError> {
        let url = self.token_url();
        info!("Requesting credential for {} from {}", request.identity, url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("identity", request.identity.as_str()),
                ("room", request.room.as_str()),
                ("model", request.model.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CredentialFetchError::Status(status.as_u16()));
        }

        let body: TokenResponse = response.json().await?;
        match body.token {
            Some(token) if !token.is_empty() => Ok(Credential::new(token)),
            _ => Err(CredentialFetchError::MissingToken),
        }
    }
}

/// Hands out a pre-issued credential
pub struct StaticCredentials {
    credential: Credential,
}

impl StaticCredentials {
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

#[async_trait::async_trait]
impl CredentialProvider for StaticCredentials {
    async fn fetch(&self, _request: &TokenRequest) -> Result<Credential, CredentialFetchError> {
        Ok(self.credential.clone())
    }
}
