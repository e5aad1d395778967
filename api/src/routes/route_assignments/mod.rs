//! # Route Assignment Routes Module
//!
//! Routes for the `/api/route-assignments` endpoint group. Every route is
//! admin-only; the guard is applied where the group is mounted.
//!
//! ## Structure
//! - `common.rs` — request/response models
//! - `get.rs` — listing assignments of a route
//! - `post.rs` — assigning a student to a route
//! - `delete.rs` — removing an assignment

use axum::{
    Router,
    routing::{delete, get, post},
};
use delete::delete_route_assignment;
use get::get_assignments_by_route;
use post::create_route_assignment;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

/// Builds the `/route-assignments` route group.
///
/// - `POST /route-assignments` → `create_route_assignment`
/// - `GET /route-assignments/route/{route_id}` → `get_assignments_by_route`
/// - `DELETE /route-assignments/{assignment_id}` → `delete_route_assignment`
pub fn route_assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route_assignment))
        .route("/route/{route_id}", get(get_assignments_by_route))
        .route("/{assignment_id}", delete(delete_route_assignment))
}
