#[cfg(test)]
mod tests {
    use super::super::common::{request, setup_test_data};
    use crate::helpers::{body_json, make_test_app};
    use axum::http::StatusCode;
    use db::factories::student_factory;
    use db::models::route_assignment;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::json;
    use serial_test::serial;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn assign_then_reassign_conflicts() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let body = json!({
            "route_id": data.route.id,
            "student_id": data.student.id,
            "pickup_latitude": 40.71,
            "pickup_longitude": -74.00
        });

        let response = app
            .clone()
            .oneshot(request("POST", "/api/route-assignments", Some(&data.admin_token), Some(body.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["route_id"], data.route.id);
        assert_eq!(json["data"]["student_id"], data.student.id);
        assert_eq!(json["data"]["pickup_latitude"], 40.71);
        assert_eq!(json["data"]["pickup_longitude"], -74.0);
        assert!(json["data"]["pickup_order"].is_null());

        let response = app
            .oneshot(request("POST", "/api/route-assignments", Some(&data.admin_token), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "ALREADY_ASSIGNED");

        let rows = route_assignment::Entity::find().count(app_state.db()).await.unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    #[serial]
    async fn same_student_may_ride_two_routes() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        for route_id in [data.route.id, data.other_route.id] {
            let response = app
                .clone()
                .oneshot(request(
                    "POST",
                    "/api/route-assignments",
                    Some(&data.admin_token),
                    Some(json!({ "route_id": route_id, "student_id": data.student.id, "pickup_order": 2 })),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }
    }

    #[tokio::test]
    #[serial]
    async fn missing_student_id_is_a_validation_error() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request(
                "POST",
                "/api/route-assignments",
                Some(&data.admin_token),
                Some(json!({ "route_id": data.route.id })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "student_id is required");
    }

    #[tokio::test]
    #[serial]
    async fn out_of_range_longitude_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request(
                "POST",
                "/api/route-assignments",
                Some(&data.admin_token),
                Some(json!({
                    "route_id": data.route.id,
                    "student_id": data.student.id,
                    "pickup_longitude": 200.0
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[serial]
    async fn malformed_json_is_a_validation_error() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/route-assignments")
            .header("Authorization", format!("Bearer {}", data.admin_token))
            .header("Content-Type", "application/json")
            .body(axum::body::Body::from("{\"route_id\": "))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    #[serial]
    async fn unknown_route_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let kid = student_factory::make(app_state.db(), None).await;

        let response = app
            .oneshot(request(
                "POST",
                "/api/route-assignments",
                Some(&data.admin_token),
                Some(json!({ "route_id": 999_999, "student_id": kid.id })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "ROUTE_OR_STUDENT_NOT_FOUND");
    }

    #[tokio::test]
    #[serial]
    async fn non_admin_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request(
                "POST",
                "/api/route-assignments",
                Some(&data.parent_token),
                Some(json!({ "route_id": data.route.id, "student_id": data.student.id })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn anonymous_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request(
                "POST",
                "/api/route-assignments",
                None,
                Some(json!({ "route_id": data.route.id, "student_id": data.student.id })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
