//! Catalog models: categories and products with multilingual text fields.

use std::collections::HashMap;

pub mod category;
pub mod product;

/// Text keyed by language code (`tr`, `en`, `ar`, `ru`).
pub type LocalizedText = HashMap<String, String>;
