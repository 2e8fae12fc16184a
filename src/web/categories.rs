//! Category endpoints. Reads are public, mutations require an admin context.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::catalog::category::{Category, CategoryCreate};
use crate::prelude::*;
use crate::web::ApiState;
use crate::web::ctx::Ctx;

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{category_id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

#[axum::debug_handler]
async fn list_categories(State(state): State<ApiState>) -> Json<Vec<Category>> {
    Json(state.db.list_categories())
}

#[axum::debug_handler]
async fn get_category(
    State(state): State<ApiState>,
    Path(category_id): Path<String>,
) -> Result<Json<Category>> {
    let category = state
        .db
        .find_category(&category_id)
        .ok_or(Error::CategoryNotFound)?;
    Ok(Json(category))
}

#[axum::debug_handler]
async fn create_category(
    State(state): State<ApiState>,
    _ctx: Ctx,
    Json(payload): Json<CategoryCreate>,
) -> Result<Json<Category>> {
    Ok(Json(state.db.insert_category(payload.into())?))
}

#[axum::debug_handler]
async fn update_category(
    State(state): State<ApiState>,
    Path(category_id): Path<String>,
    _ctx: Ctx,
    Json(payload): Json<CategoryCreate>,
) -> Result<Json<Category>> {
    Ok(Json(state.db.update_category(&category_id, payload)?))
}

#[axum::debug_handler]
async fn delete_category(
    State(state): State<ApiState>,
    Path(category_id): Path<String>,
    _ctx: Ctx,
) -> Result<Json<Value>> {
    state.db.delete_category(&category_id)?;
    Ok(Json(json!({"message": "Category deleted successfully"})))
}
