use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LocalizedText;

pub const DEFAULT_PRICE: &str = "Fiyat için iletişime geçin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Technical specifications, e.g. `power -> 3.5 KW`.
    pub specs: HashMap<String, String>,
    /// Feature bullet lists keyed by language.
    pub features: HashMap<String, Vec<String>>,
    pub price: String,
    pub is_active: bool,
    /// URLs under `/api/uploads`, in upload order.
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProductCreate {
    pub category_id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub specs: HashMap<String, String>,
    #[serde(default)]
    pub features: HashMap<String, Vec<String>>,
    #[serde(default = "default_price")]
    pub price: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Partial update: only the provided fields are changed.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProductUpdate {
    pub category_id: Option<String>,
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub specs: Option<HashMap<String, String>>,
    pub features: Option<HashMap<String, Vec<String>>>,
    pub price: Option<String>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
}

fn default_price() -> String {
    String::from(DEFAULT_PRICE)
}

fn default_active() -> bool {
    true
}

impl From<ProductCreate> for Product {
    fn from(value: ProductCreate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            category_id: value.category_id,
            name: value.name,
            description: value.description,
            specs: value.specs,
            features: value.features,
            price: value.price,
            is_active: value.is_active,
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProductUpdate {
    /// Applies the provided fields to `product` and bumps `updated_at`.
    pub fn apply(self, product: &mut Product) {
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(specs) = self.specs {
            product.specs = specs;
        }
        if let Some(features) = self.features {
            product.features = features;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        if let Some(images) = self.images {
            product.images = images;
        }
        product.updated_at = Utc::now();
    }
}
