//! License key validation against the Keygen API.
//!
//! One request per key: no caching, no retries, no offline fallback.

mod errors;
mod types;
mod validation_client;

pub use errors::ValidationError;
pub use types::{License, Outcome, ValidationParams, ValidationRequest, ValidationResponse, ValidationResult};
pub use validation_client::{VALIDATE_KEY_CONTENT_TYPE, ValidationClient};
