//! Error types for license validation.

use std::error::Error;
use std::fmt;

/// Everything that can stop a validation before a result is known.
#[derive(Debug)]
pub enum ValidationError {
    /// The HTTP client could not be built (TLS backend failed to initialize, etc.).
    Client(reqwest::Error),
    /// The request never got a response: DNS, TCP, or TLS failure.
    Transport(reqwest::Error),
    /// The configured timeout elapsed before the exchange finished.
    Timeout(reqwest::Error),
    /// The API answered with something other than 200 OK.
    Api { status: u16, body: String },
    /// The API answered 200 OK but the body isn't a validation response.
    Decode(serde_json::Error),
    /// The caller gave up before the exchange finished.
    Cancelled,
}

impl ValidationError {
    /// Sorts a reqwest failure into timeout vs. other transport trouble.
    pub(super) fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Transport(error)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client(e) => write!(f, "Failed to create HTTP client: {e}"),
            Self::Transport(e) => write!(f, "{e}"),
            Self::Timeout(e) => write!(f, "License validation timed out: {e}"),
            Self::Api { body, .. } => write!(f, "An API error occurred: {body}"),
            Self::Decode(e) => write!(f, "Invalid response from the licensing API: {e}"),
            Self::Cancelled => write!(f, "License validation cancelled"),
        }
    }
}

// Display already renders the wrapped error, so the chain continues from its cause
impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Client(e) | Self::Transport(e) | Self::Timeout(e) => e.source(),
            Self::Decode(e) => e.source(),
            Self::Api { .. } | Self::Cancelled => None,
        }
    }
}
