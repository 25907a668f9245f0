//! # HTTP Server for the Form Builder
//!
//! Serves the builder API (owner-scoped form CRUD, palette metadata,
//! property descriptors) and the public submission surface (share-token
//! pages and submission recording).
//!
//! ## Usage
//!
//! ```bash
//! encuesta serve --listen 0.0.0.0:8080
//! ```
//!
//! Owner-scoped endpoints read the owner identity from the `x-owner-id`
//! header; the identity provider itself lives outside this crate.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::error::FormError;
use crate::store::MemoryStore;

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let status = match &self {
            FormError::Unauthorized => StatusCode::UNAUTHORIZED,
            FormError::NotFound => StatusCode::NOT_FOUND,
            FormError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FormError::Published => StatusCode::CONFLICT,
            FormError::UnknownElement(_) | FormError::Layout(_) => StatusCode::BAD_REQUEST,
            FormError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}

/// Build the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Palette / element registry API
        .route("/api/elements", get(handlers::elements::list))
        .route("/api/elements/:kind", post(handlers::elements::construct_default))
        .route(
            "/api/elements/:kind/properties",
            get(handlers::elements::properties),
        )
        .route("/api/preview", post(handlers::elements::preview))
        // Owner-scoped form API
        .route("/api/forms", post(handlers::forms::create).get(handlers::forms::list))
        .route("/api/forms/:id", get(handlers::forms::detail))
        .route("/api/forms/:id/submissions", get(handlers::forms::submissions))
        .route("/api/forms/:id/content", put(handlers::forms::save_content))
        .route("/api/forms/:id/publish", post(handlers::forms::publish))
        .route("/api/stats", get(handlers::forms::stats))
        // Public submission surface
        .route(
            "/submit/:token",
            get(handlers::submit::page).post(handlers::submit::submit_page),
        )
        .route(
            "/api/submit/:token",
            get(handlers::submit::layout).post(handlers::submit::submit_api),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server with an in-memory store.
///
/// ## Example
///
/// ```no_run
/// use encuesta::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), encuesta::error::FormError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), FormError> {
    let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
    let app = router(state);

    tracing::info!(listen_addr = %config.listen_addr, "encuesta server starting");

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
