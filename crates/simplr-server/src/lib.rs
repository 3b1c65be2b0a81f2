//! simplr-server
//!
//! HTTP service for browsing lab repositories, explaining programs and
//! downloading lab reports.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/labs", get(routes::labs::list_labs))
        .route(
            "/api/explain-algorithm",
            post(routes::explain::explain_algorithm),
        )
        .route("/api/sessions", post(routes::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/api/sessions/{id}/open", post(routes::sessions::open_entry))
        .route("/api/sessions/{id}/back", post(routes::sessions::go_back))
        .route(
            "/api/sessions/{id}/metadata",
            put(routes::sessions::update_metadata),
        )
        .route("/api/sessions/{id}/file", get(routes::sessions::view_file))
        .route(
            "/api/sessions/{id}/explain",
            post(routes::sessions::explain_file),
        )
        .route(
            "/api/sessions/{id}/follow-up",
            post(routes::sessions::follow_up),
        )
        .route("/api/sessions/{id}/report", post(routes::report::generate))
        .nest_service("/static", static_files)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
