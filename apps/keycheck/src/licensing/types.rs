//! Wire types for the validate-key action.

use serde::{Deserialize, Serialize};

/// Request body for the validate-key action: `{"meta":{"key":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRequest {
    pub meta: ValidationParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationParams {
    pub key: String,
}

impl ValidationRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            meta: ValidationParams { key: key.into() },
        }
    }
}

/// The `meta` object of a validation response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// "VALID", "NOT_FOUND", "EXPIRED", ... Passed through, never interpreted.
    #[serde(rename = "constant")]
    pub code: String,
}

/// The `data` object of a validation response. Only sent for known keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    #[serde(rename = "type")]
    pub license_type: String,
    pub id: String,
}

/// Response from the validate-key action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationResponse {
    #[serde(rename = "meta")]
    pub result: ValidationResult,
    #[serde(rename = "data", default)]
    pub license: Option<License>,
}

/// What a validation response means for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid { code: String, license: License },
    /// The service said "valid" but sent no license payload.
    ValidWithoutLicense { code: String },
    Invalid { code: String },
}

impl ValidationResponse {
    pub fn into_outcome(self) -> Outcome {
        let code = self.result.code;
        match (self.result.valid, self.license) {
            (true, Some(license)) => Outcome::Valid { code, license },
            (true, None) => Outcome::ValidWithoutLicense { code },
            (false, _) => Outcome::Invalid { code },
        }
    }
}
