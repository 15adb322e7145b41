//! HTTP adapter: axum router, handlers, and error mapping.
//!
//! Endpoints:
//! - `GET  /health`             - Health check
//! - `POST /games`              - Create a game for the caller
//! - `GET  /games/{id}`         - Get the caller's view of a game
//! - `POST /games/{id}/guesses` - Submit a guess
//!
//! The caller is identified by the `x-consumer-id` header. Without it the
//! request either falls back to the configured anonymous owner or, when
//! `require_auth` is set, fails with 401.

use crate::config::ServerConfig;
use crate::error::GameError;
use crate::session::{GameId, GameRegistry, GuessOutcome, SessionView};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, instrument};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The session registry.
    pub registry: GameRegistry,
    /// Process configuration.
    pub config: ServerConfig,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: String,
}

/// Error response body: a stable machine code plus a human message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Condition kind, e.g. `not_found`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Request body for a guess submission. A missing `guess` field is treated
/// as an empty string and rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuessRequest {
    /// The guess text.
    #[serde(default)]
    pub guess: String,
}

/// A [`GameError`] carried to the HTTP layer.
#[derive(Debug, Clone)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GameError::NotFound => StatusCode::NOT_FOUND,
            GameError::InvalidGuess { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            GameError::GameFinished => StatusCode::CONFLICT,
            GameError::Unauthorized => StatusCode::UNAUTHORIZED,
        };
        let body = ErrorBody {
            code: self.0.code().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the application router. Separated from [`run`] so tests can drive
/// the router directly.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/games", post(create_game))
        .route("/games/{id}", get(get_game))
        .route("/games/{id}/guesses", post(create_guess))
        .with_state(state.clone());

    if let Some(dir) = &state.config.static_dir {
        info!(dir = %dir.display(), "Serving static assets");
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router.layer(cors)
}

/// Runs the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let registry = GameRegistry::default();
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState { registry, config });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Completes when a shutdown signal is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    info!("Shutdown signal received, stopping server");
}

/// Resolves the calling owner from the request headers.
fn owner_id(headers: &HeaderMap, config: &ServerConfig) -> Result<String, ApiError> {
    let header = headers
        .get("x-consumer-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    match header {
        Some(value) => Ok(value.to_string()),
        None if config.require_auth => Err(GameError::Unauthorized.into()),
        None => Ok(config.anonymous_owner.clone()),
    }
}

/// Health check handler.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Creates a game for the caller.
#[instrument(skip(state, headers))]
async fn create_game(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let owner = owner_id(&headers, &state.config)?;
    let view = state.registry.create_game(&owner);
    Ok((StatusCode::CREATED, Json(view)))
}

/// Returns the caller's view of a game.
#[instrument(skip(state, headers))]
async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<GameId>,
    headers: HeaderMap,
) -> Result<Json<SessionView>, ApiError> {
    let owner = owner_id(&headers, &state.config)?;
    state
        .registry
        .get_game(id, &owner)
        .map(Json)
        .ok_or_else(|| GameError::NotFound.into())
}

/// Submits a guess against a game.
#[instrument(skip(state, headers, req))]
async fn create_guess(
    State(state): State<Arc<AppState>>,
    Path(id): Path<GameId>,
    headers: HeaderMap,
    Json(req): Json<CreateGuessRequest>,
) -> Result<(StatusCode, Json<GuessOutcome>), ApiError> {
    let owner = owner_id(&headers, &state.config)?;
    let outcome = state.registry.submit_guess(id, &owner, &req.guess)?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
