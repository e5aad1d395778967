//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Login (public)
//! - `/route-assignments` → Assigning students to bus routes (admin-only)
//! - `/notifications` → Push-notification device tokens (authenticated users)

use crate::auth::guards::{allow_admin, allow_authenticated};
use crate::routes::{
    auth::auth_routes, health::health_routes, notifications::notification_routes,
    route_assignments::route_assignment_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod auth;
pub mod common;
pub mod health;
pub mod notifications;
pub mod route_assignments;

/// Builds the complete application router for all HTTP endpoints.
///
/// The access guards are attached with `route_layer`, so unknown paths still
/// answer 404 rather than 401.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/route-assignments",
            route_assignment_routes().route_layer(from_fn(allow_admin)),
        )
        .nest(
            "/notifications",
            notification_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
