pub mod auth;
pub mod auth_body;
pub mod jwt;
pub mod secret_hash;

pub const TOKEN_TYPE: &str = "bearer";
