use api::{auth::middleware::log_request, routes::routes};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
    middleware::from_fn,
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::state::AppState;

/// Router wired like the server binary, over a fresh in-memory database.
pub async fn make_test_app() -> (BoxCloneService<Request<Body>, Response<Body>, Infallible>, AppState) {
    let app_state = AppState::new(setup_test_db().await);

    let router = Router::new()
        .nest("/api", routes(app_state.clone()))
        .layer(from_fn(log_request));

    (router.into_service().boxed_clone(), app_state)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
