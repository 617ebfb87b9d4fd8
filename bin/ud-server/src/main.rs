//! UserDeck Server
//!
//! REST API for the user-administration console:
//! - /users - user CRUD
//! - /roles - role CRUD
//! - /health - health and readiness probes
//! - /swagger-ui - interactive API docs
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `UD_PORT` | `3001` | HTTP API port |
//! | `UD_MONGO_URL` | `mongodb://localhost:27017` | MongoDB connection URL |
//! | `UD_MONGO_DB` | `userdeck` | MongoDB database name |
//! | `RUST_LOG` | `info` | Log level |
//! | `LOG_FORMAT` | `text` | `json` for structured output |

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use ud_api::role::{roles_router, RoleRepository, RolesState};
use ud_api::shared::health_api::{health_router, HealthState};
use ud_api::user::{users_router, UserRepository, UsersState};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    ud_common::logging::init_logging("ud-server");

    info!("Starting UserDeck Server");

    // Configuration from environment
    let port: u16 = env_or_parse("UD_PORT", 3001);
    let mongo_url = env_or("UD_MONGO_URL", "mongodb://localhost:27017");
    let mongo_db = env_or("UD_MONGO_DB", "userdeck");

    // Connect to MongoDB. The driver connects lazily; a failed ping is
    // logged but not retried, requests will surface store errors.
    info!("Connecting to MongoDB: {}/{}", mongo_url, mongo_db);
    let mongo_client = mongodb::Client::with_uri_str(&mongo_url).await?;
    let db = mongo_client.database(&mongo_db);
    if let Err(e) = db.run_command(mongodb::bson::doc! { "ping": 1 }).await {
        warn!("MongoDB ping failed: {}", e);
    }

    // Initialize repositories
    let user_repo = Arc::new(UserRepository::new(&db));
    let role_repo = Arc::new(RoleRepository::new(&db));
    info!("Repositories initialized");

    let users_state = UsersState { user_repo };
    let roles_state = RolesState { role_repo };

    // Build the API router using OpenApiRouter for auto-collected OpenAPI paths
    let (router, mut openapi) = OpenApiRouter::new()
        .nest("/users", users_router(users_state))
        .nest("/roles", roles_router(roles_state))
        .split_for_parts();

    openapi.info.title = "UserDeck API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.description = Some("REST API for user and role administration".to_string());

    let health_state = HealthState::new(db, Some(env!("CARGO_PKG_VERSION").to_string()));

    let app = Router::new()
        .merge(router)
        .nest("/health", health_router(health_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/q/openapi", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = format!("0.0.0.0:{}", port);
    info!("API server listening on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("UserDeck Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
