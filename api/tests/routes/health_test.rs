#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn health_check_returns_ok_json() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }

    #[tokio::test]
    #[serial]
    async fn unknown_path_is_not_found_not_unauthorized() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .uri("/api/route-assignments/route/1/extra")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
