//! Web API module for ArchSense.
//!
//! This module exposes layout synthesis and the catalogs over HTTP for the
//! browser-based plan editor and 3D viewer.
//!
//! # Endpoints
//!
//! - `GET /health`, `GET /api/health` - Health check
//! - `POST /api/layout/generate` - Synthesize a floor plan for a site
//! - `GET /api/furniture/category/{category}` - List furniture in a catalog category
//! - `GET /api/rooms/catalog` - List room archetypes

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::catalog::{furniture_in_category, FurnitureArchetype, RoomArchetype, ROOM_ARCHETYPES};
use crate::config::Config;
use crate::services::{synthesize, GenerateLayoutRequest, LayoutResponse};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration the server was started with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Room catalog response.
#[derive(Debug, Serialize)]
pub struct RoomCatalogResponse {
    /// Room archetypes in catalog order.
    pub rooms: Vec<&'static RoomArchetype>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn bad_request(error: &str, details: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(error, details)),
    )
}

/// Parses a generate request body; an empty body means all defaults.
fn parse_generate_request(body: &[u8]) -> Result<GenerateLayoutRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerateLayoutRequest::default());
    }
    serde_json::from_slice(body)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/layout/generate - Synthesize a floor plan.
async fn generate_layout(State(state): State<AppState>, body: Bytes) -> ApiResult<LayoutResponse> {
    let request = parse_generate_request(&body).map_err(|e| {
        warn!("Rejected generate request body: {e}");
        bad_request("Invalid request body", e.to_string())
    })?;

    let response = synthesize(&request, &state.config.site).map_err(|e| {
        warn!("Rejected generate request: {e}");
        bad_request("Invalid site dimensions", e.to_string())
    })?;

    Ok(Json(response))
}

/// GET /api/furniture/category/{category} - Furniture archetypes for a category.
async fn furniture_category(Path(category): Path<String>) -> Json<Vec<&'static FurnitureArchetype>> {
    let items = furniture_in_category(&category);
    debug!("Furniture category '{}': {} items", category, items.len());
    Json(items)
}

/// GET /api/rooms/catalog - Room archetypes.
async fn room_catalog() -> Json<RoomCatalogResponse> {
    Json(RoomCatalogResponse {
        rooms: ROOM_ARCHETYPES.iter().collect(),
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with permissive CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/layout/generate", post(generate_layout))
        .route("/api/furniture/category/{category}", get(furniture_category))
        .route("/api/rooms/catalog", get(room_catalog))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves the API until the process exits.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Starting ArchSense web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
