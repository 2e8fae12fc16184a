//! Error-to-response mapping.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::auth::auth::AuthError;
use crate::prelude::*;

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            // Login failures never reveal which field was wrong.
            Error::WrongCredentials => (StatusCode::UNAUTHORIZED, "Incorrect username or password"),

            // Guard failures: everything except an inactive account is the
            // same outward 401.
            Error::Auth(AuthError::InactiveAdmin) => (StatusCode::BAD_REQUEST, "Inactive admin"),
            Error::Auth(AuthError::TokenCreation(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Error::Auth(
                AuthError::TokenMissing
                | AuthError::InvalidToken
                | AuthError::TokenExpired
                | AuthError::AccountNotFound,
            ) => (StatusCode::UNAUTHORIZED, "Could not validate credentials"),

            Error::CategoryNotFound => (StatusCode::NOT_FOUND, "Category not found"),
            Error::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found"),
            Error::ProductImageNotFound => (StatusCode::NOT_FOUND, "Image not found"),
            Error::ContactFormNotFound => (StatusCode::NOT_FOUND, "Contact form not found"),
            Error::CategorySlugTaken => (
                StatusCode::BAD_REQUEST,
                "Category with this slug already exists",
            ),
            Error::InvalidImageType => (
                StatusCode::BAD_REQUEST,
                "Invalid file type. Only images allowed.",
            ),

            // Internal errors - hide details
            Error::Generic(_)
            | Error::IO(_)
            | Error::Json(_)
            | Error::PasswordHash(_)
            | Error::AuthTokenCreation
            | Error::CtxMissing => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
