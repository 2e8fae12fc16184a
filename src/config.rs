use std::fmt::Display;
use std::path::PathBuf;

use chrono::TimeDelta;

use crate::auth::auth::DEFAULT_TOKEN_TTL;

pub struct ServerConfig {
    pub bind_addr: String,
    /// Signing secret for access tokens. `None` means an ephemeral secret is
    /// generated for this process and all tokens die with it.
    pub jwt_secret: Option<String>,
    pub token_ttl: TimeDelta,
    pub uploads_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:3000")),
            jwt_secret: std::env::var("JWT_SECRET").ok(),
            token_ttl: std::env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(TimeDelta::hours)
                .unwrap_or(DEFAULT_TOKEN_TTL),
            uploads_dir: std::env::var("UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
        }
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bind_addr={} token_ttl={} uploads_dir={} jwt_secret={}",
            self.bind_addr,
            self.token_ttl,
            self.uploads_dir.display(),
            if self.jwt_secret.is_some() {
                "REDACTED"
            } else {
                "ephemeral"
            }
        )
    }
}
