//! JWT signing and verification.
//!
//! Thin wrapper around `jsonwebtoken` with the crate-wide algorithm pinned to
//! HS256. The signing keys are built once at startup and injected wherever
//! tokens are minted or checked; there is no ambient key state.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Serialize, de::DeserializeOwned};

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Cryptographic key pair for JWT signing and verification.
///
/// Both halves are derived from the same symmetric secret. Rotating the secret
/// invalidates every previously issued token.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Builds keys from a configured secret, or from a random per-process
    /// secret when none is supplied. With a generated secret every token dies
    /// with the process.
    pub fn from_secret(secret: Option<&str>) -> Self {
        match secret {
            Some(secret) => Self::new(secret.as_bytes()),
            None => {
                log::warn!("JWT_SECRET not set, signing tokens with a generated per-process key");
                let mut secret = [0u8; 32];
                OsRng.fill_bytes(&mut secret);
                Self::new(&secret)
            }
        }
    }
}

pub fn jwt_encode<T>(body: &T, keys: &JwtKeys) -> Result<String, jsonwebtoken::errors::Error>
where
    T: Serialize,
{
    let header = Header::new(ALGORITHM);
    encode(&header, body, &keys.encoding)
}

/// Verifies the signature and the `exp` claim, then deserializes the claims.
pub fn jwt_decode<T>(token: &str, keys: &JwtKeys) -> Result<TokenData<T>, jsonwebtoken::errors::Error>
where
    T: DeserializeOwned,
{
    decode(token, &keys.decoding, &Validation::new(ALGORITHM))
}
