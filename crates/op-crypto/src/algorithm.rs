//! Signing-algorithm registry.
//!
//! Validates that the configured ID-token signing algorithm is compatible
//! with the resolved key material: `RS*` requires RSA, `ES*` requires the
//! matching NIST curve, `HS*` requires a symmetric secret.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::key::{EcCurve, KeyMaterial};

/// Error type for algorithm resolution.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// Algorithm name is not in the supported JWA set.
    #[error("unknown signing algorithm: {0}")]
    Unknown(String),

    /// Configured algorithm cannot be used with the configured key.
    #[error("signing algorithm {algorithm} cannot be used with {key} key material")]
    KeyMismatch {
        /// JWA name of the configured algorithm.
        algorithm: &'static str,
        /// Family of the key that was resolved.
        key: String,
    },
}

/// JWA signing algorithms accepted for ID-token signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SigningAlgorithm {
    /// RSA PKCS#1 v1.5 with SHA-256 (the default when unconfigured).
    #[serde(rename = "RS256")]
    #[default]
    Rs256,

    /// RSA PKCS#1 v1.5 with SHA-384.
    #[serde(rename = "RS384")]
    Rs384,

    /// RSA PKCS#1 v1.5 with SHA-512.
    #[serde(rename = "RS512")]
    Rs512,

    /// ECDSA using P-256 and SHA-256.
    #[serde(rename = "ES256")]
    Es256,

    /// ECDSA using P-384 and SHA-384.
    #[serde(rename = "ES384")]
    Es384,

    /// ECDSA using P-521 and SHA-512.
    #[serde(rename = "ES512")]
    Es512,

    /// HMAC with SHA-256.
    #[serde(rename = "HS256")]
    Hs256,

    /// HMAC with SHA-384.
    #[serde(rename = "HS384")]
    Hs384,

    /// HMAC with SHA-512.
    #[serde(rename = "HS512")]
    Hs512,
}

impl SigningAlgorithm {
    /// Returns the uppercase JWA name.
    #[must_use]
    pub const fn jwa_name(self) -> &'static str {
        match self {
            Self::Rs256 => "RS256",
            Self::Rs384 => "RS384",
            Self::Rs512 => "RS512",
            Self::Es256 => "ES256",
            Self::Es384 => "ES384",
            Self::Es512 => "ES512",
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }

    /// Returns whether this is an RSA algorithm.
    #[must_use]
    pub const fn is_rsa(self) -> bool {
        matches!(self, Self::Rs256 | Self::Rs384 | Self::Rs512)
    }

    /// Returns whether this is an ECDSA algorithm.
    #[must_use]
    pub const fn is_ecdsa(self) -> bool {
        matches!(self, Self::Es256 | Self::Es384 | Self::Es512)
    }

    /// Returns whether this is an HMAC algorithm.
    #[must_use]
    pub const fn is_hmac(self) -> bool {
        matches!(self, Self::Hs256 | Self::Hs384 | Self::Hs512)
    }

    /// Returns the curve an ECDSA algorithm requires, if any.
    #[must_use]
    pub const fn required_curve(self) -> Option<EcCurve> {
        match self {
            Self::Es256 => Some(EcCurve::P256),
            Self::Es384 => Some(EcCurve::P384),
            Self::Es512 => Some(EcCurve::P521),
            _ => None,
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.jwa_name())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = AlgorithmError;

    /// Accepts any casing; the registry always exposes the uppercase tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RS256" => Ok(Self::Rs256),
            "RS384" => Ok(Self::Rs384),
            "RS512" => Ok(Self::Rs512),
            "ES256" => Ok(Self::Es256),
            "ES384" => Ok(Self::Es384),
            "ES512" => Ok(Self::Es512),
            "HS256" => Ok(Self::Hs256),
            "HS384" => Ok(Self::Hs384),
            "HS512" => Ok(Self::Hs512),
            _ => Err(AlgorithmError::Unknown(s.to_string())),
        }
    }
}

/// Validates that `configured` (or the RS256 default) is usable with `key`.
///
/// # Errors
///
/// Returns [`AlgorithmError::KeyMismatch`] when the algorithm family, or
/// for ECDSA the specific curve, does not match the key material.
pub fn resolve_algorithm(
    configured: Option<SigningAlgorithm>,
    key: &KeyMaterial,
) -> Result<SigningAlgorithm, AlgorithmError> {
    let algorithm = configured.unwrap_or_default();
    let compatible = match key {
        KeyMaterial::Rsa { .. } => algorithm.is_rsa(),
        KeyMaterial::EllipticCurve { curve, .. } => algorithm.required_curve() == Some(*curve),
        KeyMaterial::Symmetric { .. } => algorithm.is_hmac(),
    };

    if compatible {
        Ok(algorithm)
    } else {
        Err(AlgorithmError::KeyMismatch {
            algorithm: algorithm.jwa_name(),
            key: key.family(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsa_key() -> KeyMaterial {
        KeyMaterial::rsa(vec![0xB2; 256], vec![1, 0, 1])
    }

    fn p384_key() -> KeyMaterial {
        KeyMaterial::ec(EcCurve::P384, vec![1; 48], vec![2; 48])
    }

    #[test]
    fn default_is_rs256() {
        let resolved = resolve_algorithm(None, &rsa_key()).unwrap();
        assert_eq!(resolved, SigningAlgorithm::Rs256);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "rs256".parse::<SigningAlgorithm>().unwrap(),
            SigningAlgorithm::Rs256
        );
        assert_eq!(
            "Es512".parse::<SigningAlgorithm>().unwrap(),
            SigningAlgorithm::Es512
        );
        assert_eq!(SigningAlgorithm::Es512.jwa_name(), "ES512");
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let result = "none".parse::<SigningAlgorithm>();
        assert!(matches!(result, Err(AlgorithmError::Unknown(_))));
    }

    #[test]
    fn rsa_algorithm_requires_rsa_key() {
        let result = resolve_algorithm(Some(SigningAlgorithm::Rs384), &p384_key());
        assert!(matches!(result, Err(AlgorithmError::KeyMismatch { .. })));
    }

    #[test]
    fn ecdsa_curve_must_match() {
        let result = resolve_algorithm(Some(SigningAlgorithm::Es256), &p384_key());
        assert!(matches!(result, Err(AlgorithmError::KeyMismatch { .. })));

        let resolved = resolve_algorithm(Some(SigningAlgorithm::Es384), &p384_key()).unwrap();
        assert_eq!(resolved, SigningAlgorithm::Es384);
    }

    #[test]
    fn hmac_requires_symmetric_secret() {
        let secret = KeyMaterial::symmetric(b"secret".to_vec());
        let resolved = resolve_algorithm(Some(SigningAlgorithm::Hs384), &secret).unwrap();
        assert_eq!(resolved, SigningAlgorithm::Hs384);

        let result = resolve_algorithm(Some(SigningAlgorithm::Hs256), &rsa_key());
        assert!(matches!(result, Err(AlgorithmError::KeyMismatch { .. })));
    }
}
