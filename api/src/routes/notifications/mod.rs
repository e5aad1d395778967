//! # Notification Routes Module
//!
//! Device token registration for push notifications. Any signed-in user may
//! manage their own tokens.

use axum::{
    Router,
    routing::get,
};
use delete::unregister_token;
use get::list_tokens;
use post::register_token;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

/// Builds the `/notifications` route group.
///
/// - `GET /notifications/tokens` → `list_tokens`
/// - `POST /notifications/tokens` → `register_token`
/// - `DELETE /notifications/tokens` → `unregister_token`
pub fn notification_routes() -> Router<AppState> {
    Router::new().route(
        "/tokens",
        get(list_tokens).post(register_token).delete(unregister_token),
    )
}
