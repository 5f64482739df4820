use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use classify_service::config::Config;
use classify_service::models::storage::{BookStore, SqliteBackend};
use classify_service::services::classify::ClassifyClient;
use classify_service::{create_router, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("classify_service=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let backend = match SqliteBackend::new(&config.database_url).await {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            error!("Failed to open database {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    match backend.test_connection().await {
        Ok(()) => info!("Database connection successful"),
        Err(e) => warn!("Database is not responding: {}", e),
    }

    let state = AppState::new(
        ClassifyClient::new(config.classify_api_url.clone()),
        backend.clone(),
    );
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Classify service starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    backend.close().await;
    info!("Classify service stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
