//! HTTP surface: router assembly, request guard and per-domain handlers.

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router, middleware};
use chrono::TimeDelta;
use serde_json::{Value, json};
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::auth::jwt::JwtKeys;
use crate::db::Db;

pub mod auth;
pub mod categories;
pub mod contact;
pub mod ctx;
pub mod error;
pub mod products;

#[derive(Clone)]
pub struct ApiState {
    pub db: Arc<Db>,
    pub keys: Arc<JwtKeys>,
    pub token_ttl: TimeDelta,
    pub uploads_dir: PathBuf,
}

/// Assembles the full application router under the `/api` prefix.
pub fn app(state: ApiState) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .merge(auth::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(contact::router())
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir));

    Router::new()
        .nest("/api", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            ctx::mw_ctx_resolver,
        ))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "GOLD Vakum Sistemleri API",
        "version": "1.0.0",
    }))
}
