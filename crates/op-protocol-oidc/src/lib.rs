//! # op-protocol-oidc
//!
//! `OpenID` Connect protocol core layered on an OAuth 2.0 authorization
//! server.
//!
//! The host authorization server keeps owning code/token issuance; this
//! crate supplies the OIDC-specific pieces around it:
//!
//! - [`flows`] - `response_type` to authorization-strategy resolution and
//!   `grant_types` aggregation
//! - [`registration`] - dynamic client registration validation
//! - [`jwks`] - JSON Web Key Set types for the JWKS endpoint
//! - [`discovery`] - `OpenID` Provider Metadata for the `.well-known` endpoint
//! - [`provider`] - provider configuration plus the signing-key handle
//! - [`endpoints`] - thin axum handlers over an injectable application store
//! - [`error`] - protocol error types following RFC 6749
//! - [`types`] - common OIDC types (response types, grant flows)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod discovery;
pub mod endpoints;
pub mod error;
pub mod flows;
pub mod jwks;
pub mod provider;
pub mod registration;
pub mod types;

pub use discovery::ProviderMetadata;
pub use endpoints::{Application, ApplicationStore, InMemoryApplicationStore, OidcState};
pub use error::{ErrorResponse, OidcError, OidcResult};
pub use flows::{strategy_for, supported_grant_types, GrantStrategy};
pub use jwks::JsonWebKeySet;
pub use provider::{OidcProvider, ProviderConfig};
pub use registration::{
    validate, NormalizedRegistration, RegistrationError, RegistrationRequest, RegistrationResponse,
};
pub use types::{GrantFlow, ResponseType};
