//! Public contact-form submissions (sales leads).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    /// Set when the lead was submitted from a product page.
    pub product_id: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ContactFormCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    pub message: String,
}

impl From<ContactFormCreate> for ContactForm {
    fn from(value: ContactFormCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: value.name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            product_id: value.product_id,
            message: value.message,
            created_at: Utc::now(),
            is_read: false,
        }
    }
}
