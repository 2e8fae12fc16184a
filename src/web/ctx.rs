//! Request guard.
//!
//! `mw_ctx_resolver` classifies every request exactly once: it pulls the
//! bearer token from the auth cookie or the `Authorization` header, verifies
//! it, resolves the subject against the admin store and stores the explicit
//! outcome (`Ok(Ctx)` or a terminal `AuthError`) in the request extensions.
//! Handlers opt in by extracting [`Ctx`].

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tower_cookies::{Cookie, Cookies};

use crate::admin::AdminAccount;
use crate::admin::AdminStore;
use crate::admin::api::AdminLogin;
use crate::auth::auth::{AuthError, AuthToken, authenticate, decode_token, encode_token};
use crate::auth::auth_body::AuthBody;
use crate::prelude::*;
use crate::web::ApiState;

pub const AUTH_TOKEN_COOKIE: &str = "auth-token";
pub const AUTH_HEADER: &str = "Authorization";
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";

/// Context of an authenticated request: the resolved, active admin account.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub admin: AdminAccount,
}

#[axum::debug_middleware]
pub async fn mw_ctx_resolver(
    State(state): State<ApiState>,
    cookies: Cookies,
    headers: HeaderMap,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = resolve_ctx(&state, &cookies, &headers);

    if ctx.is_err() {
        cookies.remove(Cookie::from(AUTH_TOKEN_COOKIE));
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Evaluated fresh on every request; there is no cached admin state.
///
/// Failure mapping: no token, bad token, expired token and unresolvable
/// subject are all terminal 401s; a resolved but inactive admin fails
/// distinctly (400 outward).
fn resolve_ctx(
    state: &ApiState,
    cookies: &Cookies,
    headers: &HeaderMap,
) -> std::result::Result<Ctx, AuthError> {
    let token = cookies
        .get(AUTH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| {
            headers
                .get(AUTH_HEADER)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.strip_prefix(AUTH_HEADER_PREFIX))
                .map(|s| s.to_string())
        })
        .ok_or(AuthError::TokenMissing)?;

    let claims = decode_token(&token, &state.keys)?;

    let admin = state
        .db
        .find_by_username(&claims.sub)
        .ok_or(AuthError::AccountNotFound)?;
    if !admin.is_active {
        return Err(AuthError::InactiveAdmin);
    }

    Ok(Ctx { admin })
}

/// Authenticates the credentials, mints a token and sets the auth cookie.
///
/// Unknown username and wrong password collapse into one generic error.
pub fn login(auth: &AdminLogin, state: &ApiState, cookies: &Cookies) -> Result<AuthBody> {
    let admin = authenticate(auth, state.db.as_ref()).ok_or(Error::WrongCredentials)?;

    let claims = AuthToken::new(&admin.username, state.token_ttl)?;
    let token = encode_token(&claims, &state.keys)?;
    cookies.add(Cookie::new(AUTH_TOKEN_COOKIE, token.access_token.clone()));

    Ok(token)
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<std::result::Result<Ctx, AuthError>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}
