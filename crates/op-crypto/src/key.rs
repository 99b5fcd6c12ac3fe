//! Decoded signing-key material.
//!
//! [`KeyMaterial`] is the typed form of a key the host application has
//! already decoded from PEM/DER or fetched from a secret store; this crate
//! performs no ASN.1 parsing itself. Construction is the only mutation
//! point, everything downstream treats a value as immutable.

use std::fmt;

use thiserror::Error;

/// Error type for key material handling.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key material was malformed or uses an unsupported shape.
    #[error("unsupported key material: {0}")]
    UnsupportedKey(String),

    /// A configured signing-key provider failed to produce a key.
    #[error("signing key provider failed: {0}")]
    Provider(String),
}

/// Elliptic curves supported for EC signing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EcCurve {
    /// NIST P-256 (secp256r1).
    #[serde(rename = "P-256")]
    P256,

    /// NIST P-384 (secp384r1).
    #[serde(rename = "P-384")]
    P384,

    /// NIST P-521 (secp521r1).
    #[serde(rename = "P-521")]
    P521,
}

impl EcCurve {
    /// Returns the JWK curve name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }

    /// Parses a curve name as it appears in JWKs or in OpenSSL output.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKey`] for any curve outside
    /// P-256/P-384/P-521.
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        match name {
            "P-256" | "prime256v1" | "secp256r1" => Ok(Self::P256),
            "P-384" | "secp384r1" => Ok(Self::P384),
            "P-521" | "secp521r1" => Ok(Self::P521),
            _ => Err(KeyError::UnsupportedKey(format!("unknown curve: {name}"))),
        }
    }

    /// Returns the field element size in bytes.
    #[must_use]
    pub const fn coordinate_length(self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }
}

/// A decoded signing key, polymorphic over the supported key families.
///
/// Equality is value equality over the decoded parameters; this is what
/// the signing-key cache uses to detect provider rotation.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// RSA key, reduced to its public parameters.
    Rsa {
        /// Modulus `n` as big-endian octets.
        modulus: Vec<u8>,
        /// Public exponent `e` as big-endian octets.
        exponent: Vec<u8>,
    },

    /// Elliptic-curve key on a NIST curve.
    EllipticCurve {
        /// Curve the public point lies on.
        curve: EcCurve,
        /// Affine x coordinate as big-endian octets.
        x: Vec<u8>,
        /// Affine y coordinate as big-endian octets.
        y: Vec<u8>,
    },

    /// Symmetric (HMAC) secret.
    ///
    /// A zero-length secret is representable here; rejecting it is a
    /// policy decision that belongs to the configuration validation layer,
    /// not to this type.
    Symmetric {
        /// Raw secret bytes. Never emitted by [`fmt::Debug`] or by any
        /// public JWK view.
        secret: Vec<u8>,
    },
}

impl KeyMaterial {
    /// Creates RSA key material from big-endian modulus and exponent octets.
    pub fn rsa(modulus: impl Into<Vec<u8>>, exponent: impl Into<Vec<u8>>) -> Self {
        Self::Rsa {
            modulus: modulus.into(),
            exponent: exponent.into(),
        }
    }

    /// Creates EC key material from big-endian affine coordinates.
    pub fn ec(curve: EcCurve, x: impl Into<Vec<u8>>, y: impl Into<Vec<u8>>) -> Self {
        Self::EllipticCurve {
            curve,
            x: x.into(),
            y: y.into(),
        }
    }

    /// Creates symmetric key material from raw secret bytes.
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Self::Symmetric {
            secret: secret.into(),
        }
    }

    /// Returns a short human-readable family tag for error messages.
    #[must_use]
    pub fn family(&self) -> String {
        match self {
            Self::Rsa { .. } => "RSA".to_string(),
            Self::EllipticCurve { curve, .. } => format!("EC {}", curve.name()),
            Self::Symmetric { .. } => "symmetric".to_string(),
        }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key parameters are deliberately not printed; the symmetric
        // secret must never reach logs.
        match self {
            Self::Rsa { modulus, .. } => {
                write!(f, "KeyMaterial::Rsa({} bit)", modulus.len() * 8)
            }
            Self::EllipticCurve { curve, .. } => {
                write!(f, "KeyMaterial::EllipticCurve({})", curve.name())
            }
            Self::Symmetric { secret } => {
                write!(f, "KeyMaterial::Symmetric({} bytes)", secret.len())
            }
        }
    }
}
