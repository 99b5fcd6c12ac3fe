//! Provider facade: configuration plus the signing-key handle.
//!
//! [`ProviderConfig`] is set once at startup and read per request;
//! [`OidcProvider`] combines it with the shared [`SigningKeyResolver`] and
//! assembles the documents the discovery and JWKS endpoints serve.

use std::sync::Arc;

use op_crypto::{resolve_algorithm, SigningAlgorithm, SigningKeyResolver};

use crate::discovery::{client_auth_methods, ProviderMetadata};
use crate::error::OidcResult;
use crate::flows::supported_grant_types;
use crate::jwks::JsonWebKeySet;
use crate::types::GrantFlow;

/// Provider-wide configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Issuer identifier; also the base for the endpoint URLs.
    pub issuer: String,

    /// Grant flows enabled on the authorization server.
    pub grant_flows: Vec<GrantFlow>,

    /// Whether refresh tokens are issued.
    pub refresh_token_enabled: bool,

    /// `response_type` values the authorization endpoint accepts.
    pub response_types: Vec<String>,

    /// Configured ID-token signing algorithm; `None` means RS256.
    pub signing_algorithm: Option<SigningAlgorithm>,

    /// Scopes advertised in the discovery document; the first also serves
    /// as the default scope for registrations that request none.
    pub scopes: Vec<String>,

    /// Whether the dynamic client registration endpoint is enabled.
    pub dynamic_client_registration: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            issuer: "http://localhost:8080".to_string(),
            grant_flows: vec![GrantFlow::AuthorizationCode],
            refresh_token_enabled: true,
            response_types: vec!["code".to_string()],
            signing_algorithm: None,
            scopes: vec!["openid".to_string()],
            dynamic_client_registration: false,
        }
    }
}

impl ProviderConfig {
    /// Default scope granted to registrations that request none.
    #[must_use]
    pub fn default_scope(&self) -> String {
        self.scopes.join(" ")
    }
}

/// The OIDC provider core handed to endpoint handlers.
pub struct OidcProvider {
    /// Static configuration.
    pub config: ProviderConfig,

    /// Signing-key resolver, shared with the token issuance path.
    pub keys: Arc<SigningKeyResolver>,
}

impl OidcProvider {
    /// Creates a provider from configuration and a key resolver.
    #[must_use]
    pub fn new(config: ProviderConfig, keys: Arc<SigningKeyResolver>) -> Self {
        Self { config, keys }
    }

    /// Advertised `grant_types`, derived from the configured flows.
    #[must_use]
    pub fn grant_types_supported(&self) -> Vec<String> {
        supported_grant_types(&self.config.grant_flows, self.config.refresh_token_enabled)
    }

    /// Resolves and validates the ID-token signing algorithm against the
    /// current signing key.
    ///
    /// # Errors
    ///
    /// Propagates key-provider failures and algorithm/key mismatches.
    pub fn signing_algorithm(&self) -> OidcResult<SigningAlgorithm> {
        let key = self.keys.signing_key()?;
        Ok(resolve_algorithm(self.config.signing_algorithm, &key)?)
    }

    /// Builds the JWKS document: one entry per configured signing key.
    ///
    /// # Errors
    ///
    /// Propagates key-provider failures.
    pub fn jwks(&self) -> OidcResult<JsonWebKeySet> {
        Ok(JsonWebKeySet::with_keys(vec![self.keys.current_jwk()?]))
    }

    /// Builds the discovery document fields sourced from this core.
    ///
    /// # Errors
    ///
    /// Propagates key-provider failures and algorithm/key mismatches.
    pub fn discovery_document(&self) -> OidcResult<ProviderMetadata> {
        let issuer = self.config.issuer.trim_end_matches('/');

        Ok(ProviderMetadata {
            issuer: issuer.to_string(),
            authorization_endpoint: format!("{issuer}/oauth/authorize"),
            token_endpoint: format!("{issuer}/oauth/token"),
            jwks_uri: format!("{issuer}/oauth/discovery/keys"),
            userinfo_endpoint: Some(format!("{issuer}/oauth/userinfo")),
            registration_endpoint: self
                .config
                .dynamic_client_registration
                .then(|| format!("{issuer}/oauth/register")),
            response_types_supported: self.config.response_types.clone(),
            subject_types_supported: vec!["public".to_string()],
            id_token_signing_alg_values_supported: vec![self
                .signing_algorithm()?
                .jwa_name()
                .to_string()],
            grant_types_supported: Some(self.grant_types_supported()),
            scopes_supported: Some(self.config.scopes.clone()),
            token_endpoint_auth_methods_supported: Some(client_auth_methods()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use op_crypto::{AlgorithmError, KeyMaterial};

    fn rsa_resolver() -> Arc<SigningKeyResolver> {
        Arc::new(SigningKeyResolver::fixed(KeyMaterial::rsa(
            vec![0xB2; 256],
            vec![1, 0, 1],
        )))
    }

    fn provider(config: ProviderConfig) -> OidcProvider {
        OidcProvider::new(config, rsa_resolver())
    }

    #[test]
    fn discovery_document_sources_core_fields() {
        let config = ProviderConfig {
            issuer: "https://provider.example.com/".to_string(),
            grant_flows: vec![GrantFlow::AuthorizationCode, GrantFlow::ImplicitOidc],
            refresh_token_enabled: true,
            response_types: vec!["code".to_string(), "id_token".to_string()],
            dynamic_client_registration: true,
            ..ProviderConfig::default()
        };
        let metadata = provider(config).discovery_document().unwrap();

        assert_eq!(metadata.issuer, "https://provider.example.com");
        assert_eq!(
            metadata.jwks_uri,
            "https://provider.example.com/oauth/discovery/keys"
        );
        assert_eq!(
            metadata.registration_endpoint.as_deref(),
            Some("https://provider.example.com/oauth/register")
        );
        assert_eq!(
            metadata.grant_types_supported.unwrap(),
            ["authorization_code", "implicit_oidc", "refresh_token"]
        );
        assert_eq!(
            metadata.id_token_signing_alg_values_supported,
            ["RS256"]
        );
    }

    #[test]
    fn registration_endpoint_is_absent_when_disabled() {
        let metadata = provider(ProviderConfig::default()).discovery_document().unwrap();
        assert_eq!(metadata.registration_endpoint, None);
    }

    #[test]
    fn jwks_carries_one_entry_per_signing_key() {
        let jwks = provider(ProviderConfig::default()).jwks().unwrap();
        assert_eq!(jwks.keys.len(), 1);
        assert_eq!(jwks.keys[0].e.as_deref(), Some("AQAB"));
    }

    #[test]
    fn algorithm_mismatch_is_a_configuration_error() {
        let config = ProviderConfig {
            signing_algorithm: Some(SigningAlgorithm::Es256),
            ..ProviderConfig::default()
        };
        let result = provider(config).signing_algorithm();
        assert!(matches!(
            result,
            Err(crate::error::OidcError::Algorithm(AlgorithmError::KeyMismatch { .. }))
        ));
    }
}
