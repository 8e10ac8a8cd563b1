// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{self, generation, results},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Generation workflows and the result store live under `/api/v1/generate`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state.
pub fn create_router(state: AppState) -> Router {
    // The dashboard may be served from any host; there is no auth to protect.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let generate_routes = Router::new()
        .route("/generate-content", post(generation::generate_content))
        .route("/generate-support", post(generation::generate_support))
        .route("/generate-parent-note", post(generation::generate_parent_note))
        .route("/save-score", post(results::save_score))
        .route("/submit-quiz", post(results::submit_quiz))
        .route("/quiz-results", get(results::list_quiz_results))
        .route("/quiz-results/latest", get(results::list_latest_results))
        .route("/students", get(results::list_students));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api/v1/generate", generate_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
