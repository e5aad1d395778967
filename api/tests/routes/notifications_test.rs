#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app};
    use api::auth::generate_jwt;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header},
    };
    use db::factories::user_factory;
    use db::models::user::UserRole;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    fn token_request(method: &str, jwt: &str, body: serde_json::Value) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri("/api/notifications/tokens")
            .header(header::AUTHORIZATION, format!("Bearer {jwt}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn parent_registers_lists_and_removes_token() {
        let (app, app_state) = make_test_app().await;
        let parent = user_factory::make(app_state.db(), UserRole::Parent).await;
        let (jwt, _) = generate_jwt(parent.id, false).unwrap();

        let response = app
            .clone()
            .oneshot(token_request("POST", &jwt, json!({ "token": "device-abc", "platform": "android" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["token"], "device-abc");
        assert_eq!(json["data"]["platform"], "android");

        let list = Request::builder()
            .uri("/api/notifications/tokens")
            .header(header::AUTHORIZATION, format!("Bearer {jwt}"))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.clone().oneshot(list).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

        let response = app
            .oneshot(token_request("DELETE", &jwt, json!({ "token": "device-abc" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    #[serial]
    async fn removing_anothers_token_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let owner = user_factory::make(app_state.db(), UserRole::Parent).await;
        let stranger = user_factory::make(app_state.db(), UserRole::Driver).await;
        let (owner_jwt, _) = generate_jwt(owner.id, false).unwrap();
        let (stranger_jwt, _) = generate_jwt(stranger.id, false).unwrap();

        app.clone()
            .oneshot(token_request("POST", &owner_jwt, json!({ "token": "owner-phone" })))
            .await
            .unwrap();

        let response = app
            .oneshot(token_request("DELETE", &stranger_jwt, json!({ "token": "owner-phone" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "TOKEN_NOT_FOUND");
    }

    #[tokio::test]
    #[serial]
    async fn registration_requires_authentication() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/notifications/tokens")
            .header(header::CONTENT_TYPE, "application/json")
            .body(AxumBody::from(json!({ "token": "x" }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
