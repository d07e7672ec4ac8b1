pub mod domain;
pub mod handlers;
pub mod shared;

use shared::app_state::AppState;
use shared::email::ResendEmailSender;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    shared::logger::init_tracing()?;

    let config = shared::config::load_config()?;
    let sender = ResendEmailSender::new(&config.email)
        .map_err(|e| anyhow::anyhow!("email sender init failed: {e}"))?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;
    let static_dir = config.server.static_dir.clone();

    let state = AppState {
        config: Arc::new(config),
        sender: Arc::new(sender),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(handlers::a005_subscription::health))
        .route("/api/send", post(handlers::a005_subscription::send))
        .with_state(state)
        .fallback_service(ServeDir::new(&static_dir))
        .layer(middleware::from_fn(shared::logger::request_log::request_logger))
        .layer(cors);

    tracing::info!("Serving frontend from {}", static_dir);
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
