//! HTTP API Layer
//!
//! This crate provides the REST API for claim records using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims and health
//! - **Middleware**: Request logging and request-id propagation
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{"detail": ...}` error responses
//!
//! Handlers reach storage only through the injected [`ClaimsPort`].
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(PostgresClaimsAdapter::new(pool)));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimsPort;

use crate::handlers::{claims, health};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimsPort>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `claims` - Storage port used by every claim handler
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(claims: Arc<dyn ClaimsPort>) -> Router {
    let state = AppState { claims };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route(
            "/:id",
            get(claims::get_claim)
                .put(claims::update_claim)
                .delete(claims::delete_claim),
        );

    // Later layers wrap earlier ones, so the request id is set before
    // tracing and request logging see the request
    Router::new()
        .merge(health_routes)
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
