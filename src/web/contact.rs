//! Contact-form endpoints. Submission is public; reading and managing leads
//! requires an admin context.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::contact::{ContactForm, ContactFormCreate};
use crate::prelude::*;
use crate::web::ApiState;
use crate::web::ctx::Ctx;

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/contact", get(list_contact_forms).post(create_contact_form))
        .route("/contact/{contact_id}/mark-read", put(mark_contact_read))
        .route(
            "/contact/{contact_id}",
            axum::routing::delete(delete_contact_form),
        )
}

#[axum::debug_handler]
async fn create_contact_form(
    State(state): State<ApiState>,
    Json(payload): Json<ContactFormCreate>,
) -> Json<ContactForm> {
    Json(state.db.insert_contact_form(payload.into()))
}

#[derive(Debug, Deserialize)]
struct ContactFilter {
    is_read: Option<bool>,
}

#[axum::debug_handler]
async fn list_contact_forms(
    State(state): State<ApiState>,
    _ctx: Ctx,
    Query(filter): Query<ContactFilter>,
) -> Json<Vec<ContactForm>> {
    Json(state.db.list_contact_forms(filter.is_read))
}

#[axum::debug_handler]
async fn mark_contact_read(
    State(state): State<ApiState>,
    Path(contact_id): Path<String>,
    _ctx: Ctx,
) -> Result<Json<Value>> {
    state.db.mark_contact_form_read(&contact_id)?;
    Ok(Json(json!({"message": "Contact form marked as read"})))
}

#[axum::debug_handler]
async fn delete_contact_form(
    State(state): State<ApiState>,
    Path(contact_id): Path<String>,
    _ctx: Ctx,
) -> Result<Json<Value>> {
    state.db.delete_contact_form(&contact_id)?;
    Ok(Json(json!({"message": "Contact form deleted successfully"})))
}
