//! TSIG key generation.
//!
//! Every call draws fresh bytes from the operating system CSPRNG. Keys are
//! never derived from configuration data and never cached.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Serialize;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants;

/// A freshly generated shared secret.
///
/// The secret is wiped from memory on drop and redacted from `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RandomKey {
    name: String,
    algorithm: String,
    secret: String,
}

impl RandomKey {
    /// Generate an `hmac-sha256` key with a 32-byte secret.
    pub fn generate(name: &str) -> Self {
        Self::generate_with(name, constants::KEY_ALGORITHM, constants::KEY_LENGTH)
    }

    /// Generate a key with an explicit algorithm and secret length in bytes.
    pub fn generate_with(name: &str, algorithm: &str, length: usize) -> Self {
        let mut bytes = Zeroizing::new(vec![0u8; length]);
        OsRng.fill_bytes(bytes.as_mut_slice());

        debug!(name, algorithm, length, "generated key");

        Self {
            name: name.to_string(),
            algorithm: algorithm.to_string(),
            secret: STANDARD.encode(bytes.as_slice()),
        }
    }

    /// Key name as it appears in `key "<name>" { ... }`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Base64-encoded secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Drop for RandomKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl std::fmt::Debug for RandomKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomKey")
            .field("name", &self.name)
            .field("algorithm", &self.algorithm)
            .field("secret", &"<redacted>")
            .finish()
    }
}
