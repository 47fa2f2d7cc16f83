//! HTTP client for the Keygen validate-key action.

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::errors::ValidationError;
use super::types::{ValidationRequest, ValidationResponse};
use crate::config::ClientConfig;

/// JSON:API media type, used for both the request body and the accepted response.
pub const VALIDATE_KEY_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Validates license keys for one account.
#[derive(Debug, Clone)]
pub struct ValidationClient {
    http: reqwest::Client,
    url: String,
}

impl ValidationClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ValidationError> {
        if config.account_id.is_empty() {
            log::warn!("No account ID configured; the licensing API will reject the request");
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ValidationError::Client)?;

        Ok(Self {
            http,
            url: config.validate_key_url(),
        })
    }

    /// Validate a license key with the licensing API.
    ///
    /// Sends exactly one request. Anything but a 200 is an API error carrying the raw
    /// response body; a 200 whose body doesn't decode is a decode error.
    pub async fn validate(&self, key: &str) -> Result<ValidationResponse, ValidationError> {
        log::debug!("Validating license key at {}", self.url);

        // json() leaves an existing Content-Type alone, so the JSON:API type set here wins
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, VALIDATE_KEY_CONTENT_TYPE)
            .header(ACCEPT, VALIDATE_KEY_CONTENT_TYPE)
            .json(&ValidationRequest::new(key))
            .send()
            .await
            .map_err(ValidationError::from_request)?;

        let status = response.status();
        log::debug!("License validation responded with {status}");

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_else(|e| {
                log::debug!("Couldn't read the body of the {status} response: {e}");
                String::new()
            });
            return Err(ValidationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(ValidationError::from_request)?;
        log::trace!("License validation raw response body: {body}");

        serde_json::from_str(&body).map_err(ValidationError::Decode)
    }

    /// Like [`validate`](Self::validate), but gives up with [`ValidationError::Cancelled`]
    /// as soon as `cancel` completes. The in-flight request is dropped along with its socket.
    pub async fn validate_until<F>(&self, key: &str, cancel: F) -> Result<ValidationResponse, ValidationError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.validate(key) => result,
            () = cancel => {
                log::info!("License validation cancelled");
                Err(ValidationError::Cancelled)
            }
        }
    }
}
