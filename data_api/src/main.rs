mod state;
mod v1;

use crate::state::{AppState, Db};
use axum::http::StatusCode;
use axum::{Router, routing::get};
use shared::{initialize_db, load_config};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config()?;
    let pool = initialize_db(&config.postgres, true).await?;

    let state = AppState {
        db: Db { pool },
    };

    let app = Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .nest("/v1", v1::router())
        .fallback(v1::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let listen_addr = config
        .server
        .map_or_else(|| DEFAULT_LISTEN_ADDR.to_owned(), |s| s.listen_addr);
    info!("starting server at {listen_addr}");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown_listener(None))
        .await?;

    Ok(())
}
