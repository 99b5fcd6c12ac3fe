//! Dynamic client registration validation.
//!
//! Validates self-registration requests against the provider's security
//! requirements before anything is persisted. Rules are applied in order
//! and the first failure wins; dynamically registered clients are always
//! created as public clients.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ErrorResponse, OidcError};

const MSG_HTTPS_REQUIRED: &str = "Redirect URI must be an HTTPS/SSL URI.";
const MSG_ABSOLUTE_URI: &str = "Redirect URI must be an absolute URI.";
const MSG_NAME_BLANK: &str = "Name can't be blank";

/// Incoming dynamic client registration request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Human-readable client name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Redirect URIs the client will use.
    #[serde(default)]
    pub redirect_uris: Vec<String>,

    /// Requested scope; absent defers to the provider's default scope
    /// policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// A validated registration, ready for the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRegistration {
    /// Client name.
    pub name: String,

    /// Redirect URIs, all verified to be absolute HTTPS URIs.
    pub redirect_uris: Vec<String>,

    /// Scope passed through verbatim; `None` defers to the provider
    /// default.
    pub scope: Option<String>,

    /// Always `false`: dynamic registration never issues
    /// confidential-client trust.
    pub confidential: bool,
}

/// Validation failure for a registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationError {
    /// Individual validation messages, in rule order.
    pub messages: Vec<String>,
}

impl RegistrationError {
    fn single(message: &str) -> Self {
        Self {
            messages: vec![message.to_string()],
        }
    }

    /// Comma-joined validation messages, as surfaced in
    /// `error_description`.
    #[must_use]
    pub fn error_description(&self) -> String {
        self.messages.join(", ")
    }

    /// Creates the 400 response body for this failure.
    #[must_use]
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: "invalid_client_params".to_string(),
            error_description: Some(self.error_description()),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_description())
    }
}

impl std::error::Error for RegistrationError {}

impl From<RegistrationError> for OidcError {
    fn from(err: RegistrationError) -> Self {
        Self::InvalidClientParams(err.error_description())
    }
}

/// Validates a dynamic client registration request.
///
/// Every redirect URI must be an absolute HTTPS URI and the client name
/// must be present. Scope is passed through verbatim; the resulting client
/// is always public.
///
/// # Errors
///
/// Returns [`RegistrationError`] carrying the validation message(s).
pub fn validate(request: &RegistrationRequest) -> Result<NormalizedRegistration, RegistrationError> {
    for uri in &request.redirect_uris {
        let parsed =
            Url::parse(uri).map_err(|_| RegistrationError::single(MSG_ABSOLUTE_URI))?;
        if parsed.scheme() != "https" {
            return Err(RegistrationError::single(MSG_HTTPS_REQUIRED));
        }
    }

    let name = request.client_name.clone().unwrap_or_default();
    if name.trim().is_empty() {
        return Err(RegistrationError::single(MSG_NAME_BLANK));
    }

    Ok(NormalizedRegistration {
        name,
        redirect_uris: request.redirect_uris.clone(),
        scope: request.scope.clone(),
        confidential: false,
    })
}

/// Successful registration response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Secret issued to the client.
    pub client_secret: String,

    /// Issued client identifier.
    pub client_id: String,

    /// Issue time as unix seconds.
    pub client_id_issued_at: i64,

    /// Registered redirect URIs.
    pub redirect_uris: Vec<String>,

    /// Client authentication methods usable at the token endpoint.
    pub token_endpoint_auth_methods_supported: Vec<String>,

    /// The provider's configured `response_type` values.
    pub response_types: Vec<String>,

    /// The provider's advertised grant types.
    pub grant_types: Vec<String>,

    /// Granted scope.
    pub scope: String,

    /// Registered application type.
    pub application_type: String,
}
