use serde::{Deserialize, Serialize};

use super::TOKEN_TYPE;

/// Login response: an access token plus its type.
#[derive(Debug, Deserialize, Serialize)]
pub struct AuthBody {
    pub access_token: String,
    pub token_type: String,
}

impl AuthBody {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            token_type: String::from(TOKEN_TYPE),
        }
    }
}
