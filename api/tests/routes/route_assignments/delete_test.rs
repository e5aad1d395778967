#[cfg(test)]
mod tests {
    use super::super::common::{request, setup_test_data};
    use crate::helpers::{body_json, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn delete_then_delete_again_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/route-assignments",
                Some(&data.admin_token),
                Some(json!({ "route_id": data.route.id, "student_id": data.student.id })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["data"]["id"].as_i64().unwrap();
        let uri = format!("/api/route-assignments/{id}");

        let response = app
            .clone()
            .oneshot(request("DELETE", &uri, Some(&data.admin_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Route assignment deleted successfully");

        let response = app
            .oneshot(request("DELETE", &uri, Some(&data.admin_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "ASSIGNMENT_NOT_FOUND");
    }

    #[tokio::test]
    #[serial]
    async fn delete_requires_admin() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request("DELETE", "/api/route-assignments/1", Some(&data.parent_token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
