//! Catalog and lead-capture backend for GOLD Vakum Sistemleri.
//!
//! Exposes CRUD over product categories and products with multilingual text
//! fields, accepts public contact-form submissions, and protects mutating
//! routes behind a bearer-token admin session.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod prelude;
pub mod web;
