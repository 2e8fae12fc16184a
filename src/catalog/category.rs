use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LocalizedText;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// URL-friendly identifier, unique across categories.
    pub slug: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryCreate {
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: String,
}

impl From<CategoryCreate> for Category {
    fn from(value: CategoryCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: value.name,
            description: value.description,
            slug: value.slug,
            image: None,
            created_at: Utc::now(),
        }
    }
}
