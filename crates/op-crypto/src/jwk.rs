//! Canonical JWK derivation and RFC 7638 thumbprints.
//!
//! Implements the canonical public view of a signing key as defined in:
//! - [RFC 7517](https://tools.ietf.org/html/rfc7517) (JSON Web Key)
//! - [RFC 7638](https://tools.ietf.org/html/rfc7638) (JWK Thumbprint)
//!
//! The thumbprint doubles as the key identifier (`kid`), so the same key
//! material always yields the same `kid` and distinct keys yield distinct
//! `kid`s with overwhelming probability.

use aws_lc_rs::digest;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};

use crate::key::{EcCurve, KeyMaterial};

/// JWK key type (`kty`) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// RSA key.
    #[serde(rename = "RSA")]
    Rsa,

    /// Elliptic-curve key.
    #[serde(rename = "EC")]
    Ec,

    /// Octet sequence (symmetric key).
    #[serde(rename = "oct")]
    Oct,
}

impl KeyType {
    /// Returns the `kty` value as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ec => "EC",
            Self::Oct => "oct",
        }
    }
}

/// Canonical public view of a signing key.
///
/// Carries `kty` and the thumbprint `kid` for every variant, plus the
/// variant-specific public parameters. The symmetric variant carries no
/// key-material field at all: its secret participates in the thumbprint
/// but is never part of this structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalJwk {
    /// Key type.
    pub kty: KeyType,

    /// RFC 7638 thumbprint of the key's canonical parameters.
    pub kid: String,

    /// RSA public exponent (base64url, unpadded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,

    /// RSA modulus (base64url, unpadded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// EC curve name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<EcCurve>,

    /// EC x coordinate (base64url, unpadded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,

    /// EC y coordinate (base64url, unpadded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

/// Derives the canonical JWK for the given key material.
///
/// Pure function of the key's public parameters: identical material always
/// produces an identical result, including the `kid`.
#[must_use]
pub fn canonicalize(key: &KeyMaterial) -> CanonicalJwk {
    match key {
        KeyMaterial::Rsa { modulus, exponent } => {
            let e = base64_uint(exponent);
            let n = base64_uint(modulus);
            let kid = thumbprint(&format!(r#"{{"e":"{e}","kty":"RSA","n":"{n}"}}"#));
            CanonicalJwk {
                kty: KeyType::Rsa,
                kid,
                e: Some(e),
                n: Some(n),
                crv: None,
                x: None,
                y: None,
            }
        }
        KeyMaterial::EllipticCurve { curve, x, y } => {
            let x = base64_uint(x);
            let y = base64_uint(y);
            let kid = thumbprint(&format!(
                r#"{{"crv":"{}","kty":"EC","x":"{x}","y":"{y}"}}"#,
                curve.name()
            ));
            CanonicalJwk {
                kty: KeyType::Ec,
                kid,
                e: None,
                n: None,
                crv: Some(*curve),
                x: Some(x),
                y: Some(y),
            }
        }
        KeyMaterial::Symmetric { secret } => {
            // The secret participates in the thumbprint only; the public
            // view carries kty and kid and nothing else.
            let k = URL_SAFE_NO_PAD.encode(secret);
            let kid = thumbprint(&format!(r#"{{"k":"{k}","kty":"oct"}}"#));
            CanonicalJwk {
                kty: KeyType::Oct,
                kid,
                e: None,
                n: None,
                crv: None,
                x: None,
                y: None,
            }
        }
    }
}

/// Computes the RFC 7638 thumbprint over the minimal member serialization.
///
/// `members` must already be the lexicographically ordered member set with
/// no insignificant whitespace.
fn thumbprint(members: &str) -> String {
    let hash = digest::digest(&digest::SHA256, members.as_bytes());
    URL_SAFE_NO_PAD.encode(hash.as_ref())
}

/// Encodes an unsigned big-endian integer as unpadded base64url.
///
/// Trims leading zero octets to the minimal canonical representation; the
/// value zero encodes as a single zero octet. Shared by all key variants
/// so thumbprint input and public output can never diverge.
fn base64_uint(octets: &[u8]) -> String {
    match octets.iter().position(|&b| b != 0) {
        Some(start) => URL_SAFE_NO_PAD.encode(&octets[start..]),
        None => URL_SAFE_NO_PAD.encode([0u8]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture RSA modulus, 2048 bits, paired with exponent AQAB (65537).
    const RSA_MODULUS: &str = "sjdnSA6UWUQQHf6BLIkIEUhMRNBJC1NN_pFt1EJmEiI88GS0ceROO5B5Ooo9Y3QOWJ_n-u1uwTHBz0HCTN4wgArWd1TcqB5GQzQRP4eYnWyPfi4CfeqAHzQp-v4VwbcK0LW4FqtW5D0dtrFtI281FDxLhARzkhU2y7fuYhL8fVw5rUhE8uwvHRZ5CEZyxf7BSHxIvOZAAymhuzNLATt2DGkDInU1BmF75tEtBJAVLzWG_j4LPZh1EpSdfezqaXQlcy9PJi916UzTl0P7Yy-ulOdUsMlB6yo8qKTY1-AbZ5jzneHbGDU_O8QjYvii1WDmJ60t0jXicmOkGrOhruOptw";

    // Fixture P-521 public point.
    const EC_X: &str = "AeYVvbl3zZcFCdE-0msqOowYODjzeXAhjsZKhdNjGlDREvko3UFOw6S43g-s8bvVBmBz3fCodEzFRYQqJVI4UFvF";
    const EC_Y: &str = "AYJ7GYeBm_Fb6liN53xGASdbRSzF34h4BDSVYzjtQc7I-1LK17fwwS3VfQCJwaT6zX33HTrhR4VoUEUJHKwR3dNs";

    fn decode(s: &str) -> Vec<u8> {
        URL_SAFE_NO_PAD.decode(s).unwrap()
    }

    #[test]
    fn rsa_known_answer_kid() {
        let key = KeyMaterial::rsa(decode(RSA_MODULUS), vec![0x01, 0x00, 0x01]);
        let jwk = canonicalize(&key);

        assert_eq!(jwk.kid, "IqYwZo2cE6hsyhs48cU8QHH4GanKIx0S4Dc99kgTIMA");
        assert_eq!(jwk.kty, KeyType::Rsa);
        assert_eq!(jwk.e.as_deref(), Some("AQAB"));
        assert_eq!(jwk.n.as_deref(), Some(RSA_MODULUS));
    }

    #[test]
    fn ec_known_answer_kid() {
        let key = KeyMaterial::ec(EcCurve::P521, decode(EC_X), decode(EC_Y));
        let jwk = canonicalize(&key);

        assert_eq!(jwk.kid, "dOx_AhaepicN2r2M-sxZhgkYZMCX7dYhPsNOw1ZiFnI");
        assert_eq!(jwk.kty, KeyType::Ec);
        assert_eq!(jwk.crv, Some(EcCurve::P521));
        assert_eq!(jwk.x.as_deref(), Some(EC_X));
        assert_eq!(jwk.y.as_deref(), Some(EC_Y));
    }

    #[test]
    fn kid_is_43_url_safe_chars() {
        let jwk = canonicalize(&KeyMaterial::symmetric(b"secret".to_vec()));
        assert_eq!(jwk.kid.len(), 43);
        assert!(jwk
            .kid
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn distinct_moduli_yield_distinct_kids() {
        let a = canonicalize(&KeyMaterial::rsa(vec![0xB2; 256], vec![1, 0, 1]));
        let b = canonicalize(&KeyMaterial::rsa(vec![0xB3; 256], vec![1, 0, 1]));
        assert_ne!(a.kid, b.kid);
    }

    #[test]
    fn canonicalize_is_deterministic() {
        let key = KeyMaterial::rsa(decode(RSA_MODULUS), vec![0x01, 0x00, 0x01]);
        assert_eq!(canonicalize(&key), canonicalize(&key));
    }

    #[test]
    fn symmetric_jwk_never_contains_the_secret() {
        let secret = b"hmac_secret_key_for_testing".to_vec();
        let jwk = canonicalize(&KeyMaterial::symmetric(secret));

        let value = serde_json::to_value(&jwk).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("kty"));
        assert!(object.contains_key("kid"));
        assert_eq!(value["kty"], "oct");
    }

    #[test]
    fn empty_symmetric_secret_still_has_a_kid() {
        let jwk = canonicalize(&KeyMaterial::symmetric(Vec::new()));
        assert_eq!(jwk.kid.len(), 43);
    }

    #[test]
    fn leading_zero_octets_are_trimmed() {
        let padded = canonicalize(&KeyMaterial::rsa(vec![0x00, 0x01, 0x02], vec![1, 0, 1]));
        let minimal = canonicalize(&KeyMaterial::rsa(vec![0x01, 0x02], vec![1, 0, 1]));
        assert_eq!(padded, minimal);
    }
}
