//! # folio-auth-simple
//!
//! Argon2-based implementation of `AuthProvider`. The original system kept
//! an unsalted fast digest of the admin password; that is a known-weak
//! practice, so hashes here are Argon2id with a per-hash random salt. The
//! seeded credential is hashed through the same path at store init, which
//! keeps seeding and verification symmetric.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use folio_core::traits::AuthProvider;

#[derive(Default)]
pub struct PasswordAuth;

impl PasswordAuth {
    pub fn new() -> Self {
        Self
    }
}

impl AuthProvider for PasswordAuth {
    /// Hashes a password into a PHC-format string for storage.
    fn hash_password(&self, password: &str) -> anyhow::Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;
        Ok(hash.to_string())
    }

    /// Verifies a password against a stored Argon2 hash. A malformed hash
    /// simply fails verification; no match is never an error.
    fn verify_password(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
