//! Main Crate Error

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("PasswordHash {0}")]
    PasswordHash(argon2::password_hash::Error),

    /* Auth Errors */
    #[error(transparent)]
    Auth(#[from] crate::auth::auth::AuthError),
    #[error("Auth Token Creation")]
    AuthTokenCreation,
    #[error("Wrong Credentials")]
    WrongCredentials,
    #[error("Context Missing")]
    CtxMissing,

    /* Api Errors */
    #[error("Category Not Found")]
    CategoryNotFound,
    #[error("Category Slug Taken")]
    CategorySlugTaken,
    #[error("Product Not Found")]
    ProductNotFound,
    #[error("Product Image Not Found")]
    ProductImageNotFound,
    #[error("Invalid Image Type")]
    InvalidImageType,
    #[error("Contact Form Not Found")]
    ContactFormNotFound,
}
