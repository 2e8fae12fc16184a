#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use chrono::TimeDelta;
use goldvakum::auth::jwt::JwtKeys;
use goldvakum::db::Db;
use goldvakum::web::{ApiState, app};
use tempfile::TempDir;

pub const TEST_SECRET: &[u8] = b"test-signing-secret";

/// A live API server bound to an ephemeral port, with direct handles to the
/// store and signing keys so tests can manipulate state behind the API.
pub struct TestServer {
    pub base_url: String,
    pub db: Arc<Db>,
    pub keys: Arc<JwtKeys>,
    pub client: reqwest::Client,
    _uploads: TempDir,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let db = Arc::new(Db::new());
        db.init().expect("Failed to provision default admin");
        let keys = Arc::new(JwtKeys::new(TEST_SECRET));
        let uploads = tempfile::tempdir().expect("Failed to create uploads dir");

        let state = ApiState {
            db: db.clone(),
            keys: keys.clone(),
            token_ttl: TimeDelta::hours(24),
            uploads_dir: PathBuf::from(uploads.path()),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            db,
            keys,
            client: reqwest::Client::new(),
            _uploads: uploads,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{endpoint}", self.base_url)
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("auth/login"))
            .json(&serde_json::json!({"username": username, "password": password}))
            .send()
            .await
            .expect("Failed to send login request")
    }

    /// Logs in as the seeded default admin and returns the access token.
    pub async fn admin_token(&self) -> String {
        let response = self.login("admin", "admin123").await;
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["token_type"], "bearer");
        body["access_token"].as_str().unwrap().to_string()
    }
}
