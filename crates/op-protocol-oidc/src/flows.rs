//! Response-type resolution and grant-type aggregation.
//!
//! The resolver is a stateless lookup: the space-delimited `response_type`
//! is normalized into a sorted token set (order-insensitive, duplicates
//! ignored) and matched exactly against the flow table.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{OidcError, OidcResult};
use crate::types::{GrantFlow, ResponseType};

/// Authorization strategies selectable from a `response_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrantStrategy {
    /// `code` - authorization code flow.
    AuthorizationCode,

    /// `token` - OAuth 2.0 implicit flow.
    Implicit,

    /// `id_token` - OIDC implicit flow, ID token only.
    ImplicitOidc,

    /// `id_token token` - OIDC implicit flow with an access token.
    ImplicitOidcWithToken,

    /// `code id_token` - hybrid flow.
    HybridCodeIdToken,

    /// `code token` - hybrid flow.
    HybridCodeToken,

    /// `code id_token token` - full hybrid flow.
    HybridFull,
}

impl GrantStrategy {
    /// Returns the canonical `response_type` string for this strategy.
    #[must_use]
    pub const fn response_type(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "code",
            Self::Implicit => "token",
            Self::ImplicitOidc => "id_token",
            Self::ImplicitOidcWithToken => "id_token token",
            Self::HybridCodeIdToken => "code id_token",
            Self::HybridCodeToken => "code token",
            Self::HybridFull => "code id_token token",
        }
    }
}

/// Selects the authorization strategy for a `response_type`.
///
/// Tokens may appear in any order and duplicates are ignored; the match
/// is exact over the resulting set.
///
/// # Errors
///
/// Returns [`OidcError::UnsupportedResponseType`] for an unknown token or
/// an empty set.
pub fn strategy_for(response_type: &str) -> OidcResult<GrantStrategy> {
    let unsupported = || OidcError::UnsupportedResponseType(response_type.to_string());

    let mut tokens = BTreeSet::new();
    for raw in response_type.split_whitespace() {
        tokens.insert(ResponseType::from_str(raw).map_err(|_| unsupported())?);
    }

    let code = tokens.contains(&ResponseType::Code);
    let id_token = tokens.contains(&ResponseType::IdToken);
    let token = tokens.contains(&ResponseType::Token);

    match (code, id_token, token) {
        (true, false, false) => Ok(GrantStrategy::AuthorizationCode),
        (false, false, true) => Ok(GrantStrategy::Implicit),
        (false, true, false) => Ok(GrantStrategy::ImplicitOidc),
        (false, true, true) => Ok(GrantStrategy::ImplicitOidcWithToken),
        (true, true, false) => Ok(GrantStrategy::HybridCodeIdToken),
        (true, false, true) => Ok(GrantStrategy::HybridCodeToken),
        (true, true, true) => Ok(GrantStrategy::HybridFull),
        (false, false, false) => Err(unsupported()),
    }
}

/// Builds the advertised `grant_types` list.
///
/// The configured flows are returned verbatim, order preserved and without
/// deduplication, with `refresh_token` appended iff refresh tokens are
/// enabled.
#[must_use]
pub fn supported_grant_types(flows: &[GrantFlow], refresh_token_enabled: bool) -> Vec<String> {
    let mut grant_types: Vec<String> = flows.iter().map(ToString::to_string).collect();
    if refresh_token_enabled {
        grant_types.push("refresh_token".to_string());
    }
    grant_types
}
