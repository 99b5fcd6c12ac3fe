//! Common OIDC protocol types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Individual `response_type` tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ResponseType {
    /// Authorization code.
    #[serde(rename = "code")]
    Code,

    /// Access token (implicit).
    #[serde(rename = "token")]
    Token,

    /// ID token.
    #[serde(rename = "id_token")]
    IdToken,
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::Token => "token",
            Self::IdToken => "id_token",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ResponseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Self::Code),
            "token" => Ok(Self::Token),
            "id_token" => Ok(Self::IdToken),
            _ => Err(format!("unknown response type token: {s}")),
        }
    }
}

/// Grant flows an authorization server can be configured with, as they
/// appear in the advertised `grant_types` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantFlow {
    /// `authorization_code`.
    #[serde(rename = "authorization_code")]
    AuthorizationCode,

    /// `implicit` - access token only.
    #[serde(rename = "implicit")]
    Implicit,

    /// `implicit_oidc` - ID token, optionally with an access token.
    #[serde(rename = "implicit_oidc")]
    ImplicitOidc,

    /// `client_credentials`.
    #[serde(rename = "client_credentials")]
    ClientCredentials,

    /// `password` (resource owner credentials; deprecated but configurable).
    #[serde(rename = "password")]
    Password,

    /// `hybrid` - code combined with an access token.
    #[serde(rename = "hybrid")]
    Hybrid,

    /// `hybrid_oidc` - code combined with an ID token.
    #[serde(rename = "hybrid_oidc")]
    HybridOidc,

    /// `hybrid_full` - code combined with both tokens.
    #[serde(rename = "hybrid_full")]
    HybridFull,
}

impl fmt::Display for GrantFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AuthorizationCode => "authorization_code",
            Self::Implicit => "implicit",
            Self::ImplicitOidc => "implicit_oidc",
            Self::ClientCredentials => "client_credentials",
            Self::Password => "password",
            Self::Hybrid => "hybrid",
            Self::HybridOidc => "hybrid_oidc",
            Self::HybridFull => "hybrid_full",
        };
        write!(f, "{s}")
    }
}

impl FromStr for GrantFlow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorization_code" => Ok(Self::AuthorizationCode),
            "implicit" => Ok(Self::Implicit),
            "implicit_oidc" => Ok(Self::ImplicitOidc),
            "client_credentials" => Ok(Self::ClientCredentials),
            "password" => Ok(Self::Password),
            "hybrid" => Ok(Self::Hybrid),
            "hybrid_oidc" => Ok(Self::HybridOidc),
            "hybrid_full" => Ok(Self::HybridFull),
            _ => Err(format!("unknown grant flow: {s}")),
        }
    }
}
