use axum::routing::get;
use axum::Router;
use demo_data_sqlx::{SqlxResult, connect, ensure_schema};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::AppConfig;
use crate::controllers::{item_controller, root_controller};
use crate::health::health_handler;
use crate::layers::with_http_layers;
use crate::models::ITEMS;
use crate::state::AppState;

/// Open the store and create the `items` table if it is missing.
pub async fn open_store(database_url: &str, max_connections: u32) -> SqlxResult<SqlitePool> {
    let pool = connect(database_url, max_connections).await?;
    ensure_schema(&pool, &ITEMS).await?;
    Ok(pool)
}

/// Assemble every route and the HTTP layers around `state`.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(root_controller::routes())
        .merge(item_controller::routes())
        .route("/health", get(health_handler));
    with_http_layers(routes).with_state(state)
}

/// Run the service until SIGINT/SIGTERM, then close the pool.
pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = open_store(&config.database_url, config.max_connections).await?;
    let app = router(AppState::new(pool.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Demo API listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Demo API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl-C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
