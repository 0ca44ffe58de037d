//! Web server for the Taskdeck UI
//!
//! Serves the built WASM assets and proxies GraphQL requests to the
//! managed backend so a local deployment avoids CORS. `/config.json`
//! hands the UI its runtime configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, Response, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use taskdeck_shared::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration document handed to the UI
    pub config: AppConfig,

    /// Managed GraphQL endpoint `/graphql` proxies to, if configured
    pub backend_url: Option<String>,

    /// API key injected into proxied requests, kept out of the browser
    pub api_key: Option<String>,

    pub http_client: reqwest::Client,
}

/// Build the router: UI assets, config document, GraphQL proxy
pub fn router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown non-asset paths fall back to index.html
    let assets = ServeDir::new(assets_dir)
        .fallback(ServeFile::new(assets_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/config.json", get(serve_config))
        .route("/graphql", any(proxy_graphql))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and start the web server
pub async fn start_server(
    port: u16,
    state: Arc<AppState>,
    assets_dir: PathBuf,
) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let app = router(state, &assets_dir);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("UI server listening on {}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    });

    Ok(handle)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Runtime configuration for the UI
async fn serve_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.config.clone()))
}

/// Proxy GraphQL requests to the managed backend
async fn proxy_graphql(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
) -> impl IntoResponse {
    let Some(backend_url) = state.backend_url.clone() else {
        return (
            StatusCode::BAD_GATEWAY,
            "No GraphQL backend configured; start with --api-url",
        )
            .into_response();
    };

    proxy_request(&state.http_client, &backend_url, state.api_key.as_deref(), req)
        .await
        .into_response()
}

/// Generic request proxy
async fn proxy_request(
    client: &reqwest::Client,
    url: &str,
    api_key: Option<&str>,
    req: Request<Body>,
) -> impl IntoResponse {
    let method = req.method().clone();
    let headers = req.headers().clone();

    let body_bytes = match axum::body::to_bytes(req.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read request body: {}", e),
            )
                .into_response();
        }
    };

    let mut proxy_req = client.request(method, url);

    // Copy relevant headers
    for (name, value) in headers.iter() {
        if name != header::HOST {
            proxy_req = proxy_req.header(name, value);
        }
    }

    // Server-side credential; never shipped to the browser
    if let Some(key) = api_key {
        if !headers.contains_key("x-api-key") {
            proxy_req = proxy_req.header("x-api-key", key);
        }
    }

    proxy_req = proxy_req.body(body_bytes);

    match proxy_req.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let headers = response.headers().clone();
            let body = response.bytes().await.unwrap_or_default();

            let mut res = Response::builder().status(status);
            for (name, value) in headers.iter() {
                res = res.header(name, value);
            }
            res.body(Body::from(body)).unwrap().into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Failed to proxy request to backend: {}", e),
        )
            .into_response(),
    }
}
