//! Process-wide signing-key resolution and caching.
//!
//! The resolver owns the configured [`KeySource`] and memoizes the
//! canonical JWK per distinct underlying key. Provider-backed sources are
//! re-queried on every resolution so a rotation is observed on the very
//! next call; the canonicalization (hashing) cost is only paid when the
//! returned material actually differs by value from the cached material.

use std::fmt;

use parking_lot::RwLock;

use crate::jwk::{canonicalize, CanonicalJwk};
use crate::key::{KeyError, KeyMaterial};

/// Zero-argument signing-key provider.
///
/// May perform I/O (e.g. fetch the key from a secret store); failures
/// propagate as [`KeyError::Provider`] with no internal retry.
pub type KeyProvider = dyn Fn() -> Result<KeyMaterial, KeyError> + Send + Sync;

/// Where the signing key comes from: a fixed value decoded at
/// configuration time, or a callable producing one on demand.
pub enum KeySource {
    /// A fixed key; canonicalized once and cached for the process lifetime.
    Fixed(KeyMaterial),

    /// A provider invoked on every resolution.
    Provided(Box<KeyProvider>),
}

impl KeySource {
    /// Wraps a provider closure as a key source.
    pub fn provided<F>(provider: F) -> Self
    where
        F: Fn() -> Result<KeyMaterial, KeyError> + Send + Sync + 'static,
    {
        Self::Provided(Box::new(provider))
    }
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(key) => f.debug_tuple("Fixed").field(key).finish(),
            Self::Provided(_) => f.write_str("Provided(..)"),
        }
    }
}

/// Last resolved key paired with its canonical JWK.
///
/// Always replaced as a unit so readers never observe a mismatched
/// (key, kid) combination.
struct CacheEntry {
    material: KeyMaterial,
    jwk: CanonicalJwk,
}

/// Shared signing-key resolver.
///
/// Constructed once per process and passed by handle to whichever
/// component needs key material. All methods take `&self`; the resolver is
/// `Send + Sync` and cheap to share behind an [`std::sync::Arc`].
pub struct SigningKeyResolver {
    source: KeySource,
    cache: RwLock<Option<CacheEntry>>,
}

impl SigningKeyResolver {
    /// Creates a resolver over the given source.
    #[must_use]
    pub fn new(source: KeySource) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
        }
    }

    /// Convenience constructor for a fixed key.
    #[must_use]
    pub fn fixed(key: KeyMaterial) -> Self {
        Self::new(KeySource::Fixed(key))
    }

    /// Convenience constructor for a provider-backed source.
    pub fn provided<F>(provider: F) -> Self
    where
        F: Fn() -> Result<KeyMaterial, KeyError> + Send + Sync + 'static,
    {
        Self::new(KeySource::provided(provider))
    }

    /// Returns the current public JWK.
    ///
    /// For provider-backed sources the provider is invoked on every call,
    /// so a rotated key is picked up immediately; the thumbprint is only
    /// recomputed when the returned material differs from the cached one.
    /// Two concurrent calls during a rotation may both recompute, but each
    /// computes the correct JWK for the key it observed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Provider`] if a configured provider fails.
    pub fn current_jwk(&self) -> Result<CanonicalJwk, KeyError> {
        let material = self.signing_key()?;

        if let Some(entry) = self.cache.read().as_ref() {
            if entry.material == material {
                return Ok(entry.jwk.clone());
            }
        }

        let jwk = canonicalize(&material);
        *self.cache.write() = Some(CacheEntry {
            material,
            jwk: jwk.clone(),
        });
        Ok(jwk)
    }

    /// Returns the current key identifier (thumbprint).
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Provider`] if a configured provider fails.
    pub fn current_kid(&self) -> Result<String, KeyError> {
        Ok(self.current_jwk()?.kid)
    }

    /// Returns the raw key material used for actual signing.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Provider`] if a configured provider fails.
    pub fn signing_key(&self) -> Result<KeyMaterial, KeyError> {
        match &self.source {
            KeySource::Fixed(key) => Ok(key.clone()),
            KeySource::Provided(provider) => provider(),
        }
    }
}

impl fmt::Debug for SigningKeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeyResolver")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn rsa_key(seed: u8) -> KeyMaterial {
        KeyMaterial::rsa(vec![seed; 256], vec![1, 0, 1])
    }

    #[test]
    fn fixed_key_kid_is_stable() {
        let resolver = SigningKeyResolver::fixed(rsa_key(0xB2));
        let first = resolver.current_kid().unwrap();
        let second = resolver.current_kid().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn provider_is_invoked_on_every_resolution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let resolver = SigningKeyResolver::provided(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(rsa_key(0xB2))
        });

        resolver.current_jwk().unwrap();
        resolver.current_jwk().unwrap();
        resolver.current_kid().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unchanged_provider_key_keeps_the_same_kid() {
        let resolver = SigningKeyResolver::provided(|| Ok(rsa_key(0xB2)));
        assert_eq!(
            resolver.current_kid().unwrap(),
            resolver.current_kid().unwrap()
        );
    }

    #[test]
    fn rotation_is_observed_on_the_next_call() {
        let current = Arc::new(Mutex::new(rsa_key(0xB2)));
        let shared = Arc::clone(&current);
        let resolver = SigningKeyResolver::provided(move || Ok(shared.lock().clone()));

        let before = resolver.current_kid().unwrap();
        *current.lock() = rsa_key(0xB3);
        let after = resolver.current_kid().unwrap();

        assert_ne!(before, after);
        // and the new kid is itself stable
        assert_eq!(after, resolver.current_kid().unwrap());
    }

    #[test]
    fn provider_failure_propagates() {
        let resolver =
            SigningKeyResolver::provided(|| Err(KeyError::Provider("vault unreachable".to_string())));
        let result = resolver.current_jwk();
        assert!(matches!(result, Err(KeyError::Provider(_))));
    }

    #[test]
    fn signing_key_returns_the_raw_material() {
        let key = KeyMaterial::symmetric(b"hmac-secret".to_vec());
        let resolver = SigningKeyResolver::fixed(key.clone());
        assert_eq!(resolver.signing_key().unwrap(), key);
    }

    #[test]
    fn concurrent_resolution_never_tears() {
        let current = Arc::new(Mutex::new(rsa_key(0xB2)));
        let shared = Arc::clone(&current);
        let resolver = Arc::new(SigningKeyResolver::provided(move || Ok(shared.lock().clone())));

        let mut handles = Vec::new();
        for seed in [0xB2u8, 0xB3, 0xB4, 0xB5] {
            let resolver = Arc::clone(&resolver);
            let current = Arc::clone(&current);
            handles.push(std::thread::spawn(move || {
                *current.lock() = rsa_key(seed);
                for _ in 0..50 {
                    let jwk = resolver.current_jwk().unwrap();
                    // the pair must be internally consistent
                    assert_eq!(jwk.kid, canonicalize_kid(&jwk));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }

    // Recomputes the kid from the JWK's own public parameters.
    fn canonicalize_kid(jwk: &CanonicalJwk) -> String {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let n = URL_SAFE_NO_PAD.decode(jwk.n.as_deref().unwrap()).unwrap();
        let e = URL_SAFE_NO_PAD.decode(jwk.e.as_deref().unwrap()).unwrap();
        canonicalize(&KeyMaterial::rsa(n, e)).kid
    }
}
