//! Fixtures shared by the route-assignment endpoint tests.

use api::auth::generate_jwt;
use axum::{
    body::Body as AxumBody,
    http::{Request, header},
};
use db::factories::{route_factory, student_factory, user_factory};
use db::models::{route, student, user::UserRole};
use sea_orm::DatabaseConnection;

pub struct TestData {
    pub admin_token: String,
    pub parent_token: String,
    pub route: route::Model,
    pub other_route: route::Model,
    pub student: student::Model,
}

pub async fn setup_test_data(db: &DatabaseConnection) -> TestData {
    let admin = user_factory::make(db, UserRole::Admin).await;
    let parent = user_factory::make(db, UserRole::Parent).await;

    let (admin_token, _) = generate_jwt(admin.id, true).unwrap();
    let (parent_token, _) = generate_jwt(parent.id, false).unwrap();

    TestData {
        admin_token,
        parent_token,
        route: route_factory::make(db).await,
        other_route: route_factory::make(db).await,
        student: student_factory::make(db, Some(parent.id)).await,
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<AxumBody> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(AxumBody::from(json.to_string()))
            .unwrap(),
        None => builder.body(AxumBody::empty()).unwrap(),
    }
}
