//! Application startup and lifecycle management.

use crate::config::CampusGuideConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::{GenerationParams, TextProvider};
use crate::services::CampusGuide;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::request_id_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub guide: Arc<CampusGuide>,
}

impl AppState {
    pub fn new(guide: Arc<CampusGuide>) -> Self {
        Self { guide }
    }
}

/// Build the HTTP router. API routes are served both at the root and under `/api`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/locations", get(handlers::list_locations))
        .route("/college", get(handlers::college_info))
        .route("/campus-guide", post(handlers::campus_guide));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .nest("/api", api.clone())
        .merge(api)
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application against the Gemini API described by `config`.
    pub async fn build(config: CampusGuideConfig) -> Result<Self, AppError> {
        let provider = GeminiTextProvider::new(GeminiConfig::from(&config)).map_err(|e| {
            tracing::error!("Failed to create Gemini provider: {}", e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an explicit text provider.
    ///
    /// Fails if the provider's connectivity check does not pass.
    pub async fn build_with_provider(
        config: CampusGuideConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        tracing::info!(provider = %provider.name(), "Testing generation service connection");
        provider.health_check().await.map_err(|e| {
            tracing::error!(
                provider = %provider.name(),
                "Generation service connectivity check failed: {}",
                e
            );
            AppError::InternalError(anyhow::anyhow!(
                "Generation service connectivity check failed: {}",
                e
            ))
        })?;
        tracing::info!("Generation service connection test successful");

        let params = GenerationParams {
            temperature: config.models.temperature,
            max_tokens: config.models.max_output_tokens,
        };
        let guide = Arc::new(CampusGuide::new(provider, params));
        let router = build_router(AppState::new(guide));

        // Port 0 binds a random port (used by tests)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            endpoints = "GET /locations, GET /college, POST /campus-guide (also under /api)",
            "Campus guide service listening"
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
