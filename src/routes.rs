// src/routes.rs

use std::path::PathBuf;

use axum::{
    Router,
    http::{Method, header},
    routing::{MethodRouter, get_service, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};

use crate::{error::AppError, handlers::submission, state::AppState};

/// Assembles the main application router.
///
/// * Serves the three test page assets from the configured static directory.
/// * Mounts the submission endpoint.
/// * Applies global middleware (Trace, CORS). The CORS layer answers every
///   `OPTIONS` request itself, whatever the path.
/// * Anything else, including a wrong method on a known path, is a 404.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let assets = state.config.static_dir.clone();

    Router::new()
        .route("/", asset(assets.join("index.html")))
        .route("/index.html", asset(assets.join("index.html")))
        .route("/styles.css", asset(assets.join("styles.css")))
        .route("/app.js", asset(assets.join("app.js")))
        .route("/submit-test", post(submission::submit_test).fallback(not_found))
        .fallback(not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// A static file, served verbatim with a content type guessed from its
/// extension. A missing file yields 404.
fn asset(path: PathBuf) -> MethodRouter<AppState> {
    get_service(ServeFile::new(path)).fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
