#[cfg(test)]
mod tests {
    use super::super::common::{request, setup_test_data};
    use crate::helpers::{body_json, make_test_app};
    use axum::http::StatusCode;
    use db::factories::student_factory;
    use db::repositories::route_assignment_repository::RouteAssignmentRepository;
    use serial_test::serial;
    use services::route_assignment::{CreateRouteAssignment, RouteAssignmentService};
    use services::service::Service;
    use tower::ServiceExt;

    #[tokio::test]
    #[serial]
    async fn lists_route_in_stop_order_with_student_details() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let db = app_state.db();
        let service = RouteAssignmentService::new(RouteAssignmentRepository::new(db.clone()));
        let second_kid = student_factory::make(db, None).await;
        let elsewhere = student_factory::make(db, None).await;

        let assign = |route_id: i64, student_id: i64, pickup_order: Option<i32>| CreateRouteAssignment {
            route_id,
            student_id,
            pickup_latitude: None,
            pickup_longitude: None,
            pickup_order,
        };
        let unordered = service.create(assign(data.route.id, data.student.id, None)).await.unwrap();
        let first = service.create(assign(data.route.id, second_kid.id, Some(1))).await.unwrap();
        service.create(assign(data.other_route.id, elsewhere.id, Some(1))).await.unwrap();

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/route-assignments/route/{}", data.route.id),
                Some(&data.admin_token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let rows = json["data"].as_array().expect("data should be an array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], first.id);
        assert_eq!(rows[0]["pickup_order"], 1);
        assert_eq!(rows[1]["id"], unordered.id);
        assert!(rows[1]["pickup_order"].is_null());

        let kid = &rows[1]["student"];
        assert_eq!(kid["id"], data.student.id);
        assert_eq!(kid["first_name"], data.student.first_name);
        assert_eq!(kid["last_name"], data.student.last_name);
        assert_eq!(kid["home_latitude"], 40.7128);
        assert_eq!(kid["home_longitude"], -74.006);
    }

    #[tokio::test]
    #[serial]
    async fn empty_route_returns_empty_array() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/route-assignments/route/{}", data.route.id),
                Some(&data.admin_token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    #[serial]
    async fn listing_requires_admin() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/route-assignments/route/{}", data.route.id),
                Some(&data.parent_token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
