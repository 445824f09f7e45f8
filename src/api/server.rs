//! Excel Data API server implementation
//!
//! HTTP server using Axum. Routes are read-only and reload the configured
//! workbook on every request.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 9090;

/// Default location of the source workbook
pub const DEFAULT_WORKBOOK_PATH: &str = "./Data/capbudg.xls";

/// API Server configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub workbook_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK_PATH),
        }
    }
}

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub workbook_path: PathBuf,
    pub version: String,
}

impl AppState {
    pub fn new(workbook_path: impl Into<PathBuf>) -> Self {
        Self {
            workbook_path: workbook_path.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Fully open CORS: any origin (mirrored so credentials are allowed),
/// any method, any header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the application router.
///
/// Separated from [`run_api_server`] so tests can drive it directly.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/list_tables", get(handlers::list_tables))
        .route("/get_table_details", get(handlers::get_table_details))
        .route("/row_sum", get(handlers::row_sum))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Run the API server
pub async fn run_api_server(config: ApiConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "excel_data_api=info,tower_http=info".into()),
        )
        .init();

    let state = Arc::new(AppState::new(config.workbook_path.clone()));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Excel Data API starting on http://{}", listener.local_addr()?);
    info!("   Workbook: {}", config.workbook_path.display());
    info!("   Endpoints: {}", handlers::ENDPOINTS.join(", "));
    if !config.workbook_path.exists() {
        warn!(
            "Workbook {} does not exist yet; data routes will return 404 until it does",
            config.workbook_path.display()
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Excel Data API shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
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

    info!("Shutdown signal received, stopping server...");
}
