//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    add_team_handler, create_pull_request_handler, get_review_handler, get_team_handler,
    health_handler, merge_pull_request_handler, reassign_handler, reviewers_handler,
    set_is_active_handler, stats_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub server_deps: Arc<ServerDeps>,
}

/// CORS layer for the configured origins; `*` allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(server_deps: ServerDeps, allowed_origins: &[String]) -> Router {
    let app_state = AxumAppState {
        server_deps: Arc::new(server_deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        // Teams
        .route("/team/add", post(add_team_handler))
        .route("/team/get", get(get_team_handler))
        // Users
        .route("/users/setIsActive", post(set_is_active_handler))
        .route("/users/getReview", get(get_review_handler))
        // Pull requests
        .route("/pullRequest/create", post(create_pull_request_handler))
        .route("/pullRequest/merge", post(merge_pull_request_handler))
        .route("/pullRequest/reassign", post(reassign_handler))
        .route("/pullRequest/reviewers", get(reviewers_handler))
        // Reporting
        .route("/stats", get(stats_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
