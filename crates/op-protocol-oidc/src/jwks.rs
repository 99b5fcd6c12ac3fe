//! JSON Web Key Set types for the JWKS endpoint.
//!
//! Entries are [`CanonicalJwk`]s: a symmetric signing key contributes its
//! `kty` and `kid` only, never its secret bytes.

use op_crypto::CanonicalJwk;
use serde::{Deserialize, Serialize};

/// JSON Web Key Set returned by the JWKS endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JsonWebKeySet {
    /// One entry per configured signing key.
    pub keys: Vec<CanonicalJwk>,
}

impl JsonWebKeySet {
    /// Creates an empty key set.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Creates a key set with the given keys.
    #[must_use]
    pub const fn with_keys(keys: Vec<CanonicalJwk>) -> Self {
        Self { keys }
    }

    /// Adds a key to the set.
    pub fn add_key(&mut self, key: CanonicalJwk) {
        self.keys.push(key);
    }

    /// Finds a key by its ID.
    #[must_use]
    pub fn find_key(&self, kid: &str) -> Option<&CanonicalJwk> {
        self.keys.iter().find(|k| k.kid == kid)
    }
}
