//! # op-crypto
//!
//! Signing-key management for the `OpenID` Connect provider core.
//!
//! This crate owns everything the protocol layer needs in order to answer
//! "what is the current signing key":
//!
//! - [`key`] - typed key material as decoded by the host application
//! - [`jwk`] - canonical JWK derivation with RFC 7638 thumbprint key IDs
//! - [`algorithm`] - signing-algorithm registry and key compatibility checks
//! - [`resolver`] - the memoizing, rotation-aware signing-key resolver
//! - [`random`] - secure random generation for client credentials
//!
//! All operations are synchronous; the only potentially slow or failing
//! dependency is a host-supplied key provider, which is treated as an
//! opaque callable with no internal retry.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod algorithm;
pub mod jwk;
pub mod key;
pub mod random;
pub mod resolver;

pub use algorithm::{resolve_algorithm, AlgorithmError, SigningAlgorithm};
pub use jwk::{canonicalize, CanonicalJwk, KeyType};
pub use key::{EcCurve, KeyError, KeyMaterial};
pub use resolver::{KeySource, SigningKeyResolver};
