//! `OpenID` Provider Metadata for the discovery document.
//!
//! Only the fields sourced from this core are modeled; the host
//! authorization server merges in anything endpoint-specific it owns.

use serde::{Deserialize, Serialize};

/// `OpenID` Provider Metadata, returned by the
/// `.well-known/openid-configuration` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// Issuer identifier URL.
    pub issuer: String,

    /// Authorization endpoint URL.
    pub authorization_endpoint: String,

    /// Token endpoint URL.
    pub token_endpoint: String,

    /// JSON Web Key Set document URL.
    pub jwks_uri: String,

    /// `UserInfo` endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,

    /// Dynamic client registration endpoint URL, present when registration
    /// is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_endpoint: Option<String>,

    /// Supported `response_type` values.
    pub response_types_supported: Vec<String>,

    /// Supported subject identifier types.
    pub subject_types_supported: Vec<String>,

    /// Signing algorithms usable for ID tokens.
    pub id_token_signing_alg_values_supported: Vec<String>,

    /// Advertised grant types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_types_supported: Option<Vec<String>>,

    /// Supported scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes_supported: Option<Vec<String>>,

    /// Client authentication methods for the token endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_methods_supported: Option<Vec<String>>,
}

/// Client authentication methods this provider supports at the token
/// endpoint.
#[must_use]
pub fn client_auth_methods() -> Vec<String> {
    vec![
        "client_secret_basic".to_string(),
        "client_secret_post".to_string(),
    ]
}
