//! OIDC protocol error types.
//!
//! Error responses follow RFC 6749: a stable `error` code plus an optional
//! human-readable `error_description`. Nothing in this crate is silently
//! swallowed; every failure is typed and propagates to the nearest
//! endpoint for translation into a protocol-level response.

use op_crypto::{AlgorithmError, KeyError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OIDC protocol errors surfaced by this crate.
#[derive(Debug, Error)]
pub enum OidcError {
    /// `response_type` did not match any supported flow combination.
    #[error("unsupported response type: {0:?}")]
    UnsupportedResponseType(String),

    /// Dynamic client registration parameters failed validation.
    #[error("{0}")]
    InvalidClientParams(String),

    /// Signing key material could not be resolved.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Signing algorithm configuration is incompatible with the key.
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OidcError {
    /// Returns the OAuth 2.0 error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedResponseType(_) => "unsupported_response_type",
            Self::InvalidClientParams(_) => "invalid_client_params",
            Self::Key(_) | Self::Algorithm(_) | Self::Internal(_) => "server_error",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::UnsupportedResponseType(_) | Self::InvalidClientParams(_) => 400,
            Self::Key(_) | Self::Algorithm(_) | Self::Internal(_) => 500,
        }
    }

    /// Creates the serializable error response body.
    #[must_use]
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.error_code().to_string(),
            error_description: Some(self.to_string()),
        }
    }
}

/// OAuth 2.0 error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub error: String,

    /// Human-readable error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// Result type for OIDC operations.
pub type OidcResult<T> = Result<T, OidcError>;
