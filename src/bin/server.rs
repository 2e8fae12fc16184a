use std::sync::Arc;

use goldvakum::auth::jwt::JwtKeys;
use goldvakum::config::ServerConfig;
use goldvakum::db::seed::seed_catalog;
use goldvakum::db::Db;
use goldvakum::web::{ApiState, app};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Starting GOLD Vakum Sistemleri API with {config}");

    let db = Arc::new(Db::new());
    db.init().expect("Failed to provision default admin");
    seed_catalog(&db).expect("Failed to seed catalog");
    std::fs::create_dir_all(&config.uploads_dir).expect("Failed to create uploads directory");

    let state = ApiState {
        db,
        keys: Arc::new(JwtKeys::from_secret(config.jwt_secret.as_deref())),
        token_ttl: config.token_ttl,
        uploads_dir: config.uploads_dir.clone(),
    };

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
