use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod api;

/// A privileged account. There is a single role; every admin has identical
/// privileges, and exactly one account is provisioned at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub id: String,
    /// Unique, case-sensitive; doubles as the token subject.
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Inactive accounts fail the request guard even with a valid token.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// The one store contract the auth core consumes: lookups by exact username,
/// both at login and after token verification.
pub trait AdminStore: Send + Sync {
    fn find_by_username(&self, username: &str) -> Option<AdminAccount>;
}
