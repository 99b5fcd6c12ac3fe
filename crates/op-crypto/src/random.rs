//! Cryptographically secure random generation for client credentials.

use rand::distr::{Alphanumeric, SampleString};

/// Generates a cryptographically secure random alphanumeric string.
#[must_use]
pub fn random_alphanumeric(len: usize) -> String {
    let mut rng = rand::rng();
    Alphanumeric.sample_string(&mut rng, len)
}

/// Generates a client secret for dynamically registered clients.
///
/// 48 alphanumeric characters, roughly 285 bits of entropy.
#[must_use]
pub fn generate_client_secret() -> String {
    random_alphanumeric(48)
}
