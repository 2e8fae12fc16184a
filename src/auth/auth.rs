use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::admin::api::AdminLogin;
use crate::admin::{AdminAccount, AdminStore};
use crate::auth::jwt::{JwtKeys, jwt_decode, jwt_encode};
use crate::auth::secret_hash::is_secret_valid;
use crate::prelude::*;

use super::auth_body::AuthBody;

pub const DEFAULT_TOKEN_TTL: TimeDelta = TimeDelta::hours(24);

/// Signed claims carried by an access token. The subject is the admin's
/// username; validity is fixed at mint time and cannot be extended.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum AuthError {
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Token Missing")]
    TokenMissing,
    #[error("Token Expired")]
    TokenExpired,
    #[error("Account Not Found")]
    AccountNotFound,
    #[error("Inactive Admin")]
    InactiveAdmin,
    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl AuthToken {
    pub fn new(subject: &str, token_duration: TimeDelta) -> Result<Self> {
        let expiration = Utc::now()
            .checked_add_signed(token_duration)
            .ok_or(Error::AuthTokenCreation)?;

        Ok(Self {
            sub: String::from(subject),
            exp: expiration.timestamp(),
            iat: Utc::now().timestamp(),
        })
    }
}

/// Checks the supplied credentials against the stored hash.
///
/// Unknown usernames and wrong passwords both come back as `None` so the
/// caller cannot tell which field was wrong. `is_active` is deliberately not
/// consulted here: a disabled admin can still obtain a token at login but is
/// rejected by the request guard on every protected call.
pub fn authenticate(auth: &AdminLogin, store: &dyn AdminStore) -> Option<AdminAccount> {
    let admin = store.find_by_username(&auth.username)?;
    if !is_secret_valid(&auth.password, &admin.hashed_password) {
        return None;
    }
    Some(admin)
}

pub fn encode_token(token: &AuthToken, keys: &JwtKeys) -> Result<AuthBody> {
    let token = jwt_encode(token, keys).map_err(|err| {
        log::error!("Failed to encode JWT {err}");
        AuthError::TokenCreation(err)
    })?;

    Ok(AuthBody::new(token))
}

/// Verifies a token string and returns its claims.
///
/// An expired-but-otherwise-valid token fails as [`AuthError::TokenExpired`];
/// every other failure (bad signature, malformed structure) collapses into
/// [`AuthError::InvalidToken`]. Both map outward to a 401.
pub fn decode_token(token: &str, keys: &JwtKeys) -> std::result::Result<AuthToken, AuthError> {
    jwt_decode::<AuthToken>(token, keys)
        .map(|data| data.claims)
        .map_err(|err| match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => {
                log::error!("Failed to decode jwt token {err}");
                AuthError::InvalidToken
            }
        })
}
