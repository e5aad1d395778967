#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app};
    use api::auth::Claims;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header},
    };
    use db::models::user::UserRole;
    use db::repositories::user_repository::UserRepository;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
    use serde_json::json;
    use serial_test::serial;
    use services::{
        service::Service,
        user::{CreateUser, UserService},
    };
    use tower::ServiceExt;
    use util::config;

    async fn create_user(db: &sea_orm::DatabaseConnection, username: &str, role: UserRole) {
        UserService::new(UserRepository::new(db.clone()))
            .create(CreateUser {
                username: username.into(),
                email: format!("{username}@test.com"),
                password: "password123".into(),
                role,
            })
            .await
            .expect("Failed to create user");
    }

    fn login_request(body: serde_json::Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn login_returns_token_with_admin_claim() {
        let (app, app_state) = make_test_app().await;
        create_user(app_state.db(), "fleet_admin", UserRole::Admin).await;

        let response = app
            .oneshot(login_request(json!({ "username": "fleet_admin", "password": "password123" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["user"]["username"], "fleet_admin");
        assert_eq!(json["data"]["user"]["role"], "admin");
        assert!(json["data"]["user"].get("password_hash").is_none());
        assert!(json["data"]["expires_at"].as_str().is_some());

        let token = json["data"]["token"].as_str().unwrap();
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap()
        .claims;
        assert!(claims.admin);
    }

    #[tokio::test]
    #[serial]
    async fn wrong_password_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        create_user(app_state.db(), "driver_dan", UserRole::Driver).await;

        let response = app
            .oneshot(login_request(json!({ "username": "driver_dan", "password": "nope" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    #[serial]
    async fn empty_username_is_a_validation_error() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(login_request(json!({ "username": "", "password": "x" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}
