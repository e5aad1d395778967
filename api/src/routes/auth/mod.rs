//! # auth Routes Module
//!
//! - `post.rs` — `POST /auth/login`

pub mod post;

use axum::{Router, routing::post};
use post::login;
use util::state::AppState;

/// Builds the `/auth` route group.
///
/// - `POST /auth/login` → `login`
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
