use serde::{Deserialize, Serialize};

use super::AdminAccount;

/// Outward shape of an admin; the password hash never leaves the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminApi {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}

impl From<AdminAccount> for AdminApi {
    fn from(value: AdminAccount) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
        }
    }
}
