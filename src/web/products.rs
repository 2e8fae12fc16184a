//! Product endpoints, including image upload/removal. Reads are public,
//! mutations require an admin context.

use axum::extract::{Multipart, Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::catalog::product::{Product, ProductCreate, ProductUpdate};
use crate::prelude::*;
use crate::web::ApiState;
use crate::web::ctx::Ctx;

const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/jpg", "image/webp"];

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/{product_id}/images", post(upload_product_image))
        .route(
            "/products/{product_id}/images/{image_index}",
            axum::routing::delete(delete_product_image),
        )
}

#[derive(Debug, Deserialize)]
struct ProductFilter {
    category_id: Option<String>,
    is_active: Option<bool>,
}

/// Lists products; inactive ones are hidden unless `is_active=false` is asked
/// for explicitly.
#[axum::debug_handler]
async fn list_products(
    State(state): State<ApiState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    let is_active = filter.is_active.unwrap_or(true);
    Json(
        state
            .db
            .list_products(filter.category_id.as_deref(), Some(is_active)),
    )
}

#[axum::debug_handler]
async fn get_product(
    State(state): State<ApiState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>> {
    let product = state
        .db
        .find_product(&product_id)
        .ok_or(Error::ProductNotFound)?;
    Ok(Json(product))
}

#[axum::debug_handler]
async fn create_product(
    State(state): State<ApiState>,
    _ctx: Ctx,
    Json(payload): Json<ProductCreate>,
) -> Result<Json<Product>> {
    state
        .db
        .find_category(&payload.category_id)
        .ok_or(Error::CategoryNotFound)?;

    Ok(Json(state.db.insert_product(payload.into())))
}

#[axum::debug_handler]
async fn update_product(
    State(state): State<ApiState>,
    Path(product_id): Path<String>,
    _ctx: Ctx,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    Ok(Json(state.db.update_product(&product_id, payload)?))
}

#[axum::debug_handler]
async fn delete_product(
    State(state): State<ApiState>,
    Path(product_id): Path<String>,
    _ctx: Ctx,
) -> Result<Json<Value>> {
    state.db.delete_product(&product_id)?;
    Ok(Json(json!({"message": "Product deleted successfully"})))
}

/// Stores the uploaded file under the uploads directory and appends its public
/// URL to the product's image list.
#[axum::debug_handler]
async fn upload_product_image(
    State(state): State<ApiState>,
    Path(product_id): Path<String>,
    _ctx: Ctx,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    state
        .db
        .find_product(&product_id)
        .ok_or(Error::ProductNotFound)?;

    let field = multipart
        .next_field()
        .await
        .map_err(|err| Error::Generic(format!("Failed to read multipart field: {err}")))?
        .ok_or_else(|| Error::Generic(String::from("Missing file field")))?;

    let content_type = field.content_type().unwrap_or_default().to_string();
    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(Error::InvalidImageType);
    }

    let extension = field
        .file_name()
        .and_then(|name| name.rsplit('.').next())
        .unwrap_or("jpg")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|err| Error::Generic(format!("Failed to read upload body: {err}")))?;

    let unique_filename = format!("{product_id}_{}.{extension}", Uuid::new_v4());
    std::fs::create_dir_all(&state.uploads_dir)?;
    std::fs::write(state.uploads_dir.join(&unique_filename), &data)?;

    let image_url = format!("/api/uploads/{unique_filename}");
    state.db.push_product_image(&product_id, image_url.clone())?;

    Ok(Json(json!({
        "message": "Image uploaded successfully",
        "image_url": image_url,
    })))
}

#[axum::debug_handler]
async fn delete_product_image(
    State(state): State<ApiState>,
    Path((product_id, image_index)): Path<(String, usize)>,
    _ctx: Ctx,
) -> Result<Json<Value>> {
    state.db.remove_product_image(&product_id, image_index)?;
    Ok(Json(json!({"message": "Image deleted successfully"})))
}
