//! Login and current-admin endpoints.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_cookies::Cookies;

use crate::admin::api::{AdminApi, AdminLogin};
use crate::auth::auth_body::AuthBody;
use crate::prelude::*;
use crate::web::ApiState;
use crate::web::ctx::{self, Ctx};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
}

#[axum::debug_handler]
async fn login(
    State(state): State<ApiState>,
    cookies: Cookies,
    Json(payload): Json<AdminLogin>,
) -> Result<Json<AuthBody>> {
    Ok(Json(ctx::login(&payload, &state, &cookies)?))
}

#[axum::debug_handler]
async fn me(ctx: Ctx) -> Json<AdminApi> {
    Json(ctx.admin.into())
}
