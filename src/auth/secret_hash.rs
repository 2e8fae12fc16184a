//! Password hashing and verification using Argon2.
//!
//! Hashes are self-describing (algorithm, parameters, salt and digest in one
//! string), so verification needs nothing beyond the stored hash itself.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Generates a salted Argon2 hash for the provided password.
///
/// A fresh random salt is drawn per call, so hashing the same password twice
/// yields different strings.
pub fn generate_secret_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash in constant time.
///
/// A malformed stored hash verifies as `false` rather than erroring; login
/// must never panic or leak why a credential check failed.
pub fn is_secret_valid(pw: &str, hash: &str) -> bool {
    let Ok(hash) = PasswordHashString::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok()
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}
