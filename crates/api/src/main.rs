use std::net::SocketAddr;
use std::sync::Arc;

use cutroom_api::config::ServerConfig;
use cutroom_api::router::build_app_router;
use cutroom_api::state::AppState;
use cutroom_cloud::local::LocalStorage;
use cutroom_cloud::s3::S3Storage;
use cutroom_cloud::StorageProvider;
use cutroom_gen::{GenClient, GenConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cutroom_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = cutroom_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    cutroom_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    cutroom_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Object storage ---
    let storage: Arc<dyn StorageProvider> = match config.storage_backend.as_str() {
        "local" => {
            tracing::info!(media_root = %config.media_root, "Using local object storage");
            Arc::new(LocalStorage::new(&config.media_root, &config.public_base_url))
        }
        "s3" => {
            assert!(
                !config.s3_bucket.is_empty(),
                "S3_BUCKET must be set when STORAGE_BACKEND=s3"
            );
            tracing::info!(bucket = %config.s3_bucket, "Using S3 object storage");
            Arc::new(S3Storage::from_env(&config.s3_bucket, &config.s3_public_base_url).await)
        }
        other => panic!("Unknown STORAGE_BACKEND '{other}' (expected 'local' or 's3')"),
    };

    // --- Generation client ---
    let gen = GenClient::new(GenConfig::from_env()).expect("Failed to build generation client");
    tracing::info!("Generation client ready");

    // --- App state and router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage,
        gen: Arc::new(gen),
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
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
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
