//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: credential store and validation pipeline wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs
//! - `errors.rs`: mapping validation failures to status codes and JSON bodies

use axum::{Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: services::AppServices) -> Router {
    // Guarded routes: the pipeline must accept the request first.
    let guarded = routes::router().route_layer(ServiceBuilder::new().layer(
        axum::middleware::from_fn_with_state(services.clone(), middleware::validate_request),
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(guarded)
        .with_state(services)
}
