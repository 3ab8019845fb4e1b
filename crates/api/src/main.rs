use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use civica_api::config::{ServerConfig, StorageBackend};
use civica_api::router::build_app_router;
use civica_api::state::AppState;
use civica_classifier::ClassifierClient;
use civica_storage::{LocalStorage, ObjectStorage, S3Storage};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "civica_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = civica_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    civica_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    civica_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Object storage ---
    let storage: Arc<dyn ObjectStorage> = match &config.storage {
        StorageBackend::Local {
            upload_dir,
            public_base_url,
        } => {
            tokio::fs::create_dir_all(upload_dir)
                .await
                .expect("Failed to create upload directory");
            tracing::info!(%upload_dir, "Using local image storage");
            Arc::new(LocalStorage::new(upload_dir.clone(), public_base_url.clone()))
        }
        StorageBackend::S3 {
            bucket,
            public_base_url,
        } => {
            tracing::info!(%bucket, "Using S3 image storage");
            Arc::new(S3Storage::from_env(bucket.clone(), public_base_url.clone()).await)
        }
    };

    // --- Image classifier ---
    let classifier = Arc::new(ClassifierClient::new(
        config.classifier_url.clone(),
        config.classifier_timeout,
    ));
    tracing::info!(url = %config.classifier_url, "Image classifier client ready");

    // --- App state / router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        classifier,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
