use crate::response::ApiResponse;
use crate::routes::common::app_error;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::repositories::route_assignment_repository::RouteAssignmentRepository;
use services::route_assignment::RouteAssignmentService;
use util::state::AppState;

/// DELETE /api/route-assignments/{assignment_id}
///
/// Removes a student from a route.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Route assignment deleted successfully" }
/// ```
/// - `404 Not Found` (`ASSIGNMENT_NOT_FOUND`)
pub async fn delete_route_assignment(
    State(app_state): State<AppState>,
    Path(assignment_id): Path<i64>,
) -> Response {
    let service = RouteAssignmentService::new(RouteAssignmentRepository::new(app_state.db_clone()));

    match service.delete_route_assignment(assignment_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<()>>::success(
                None,
                "Route assignment deleted successfully",
            )),
        )
            .into_response(),
        Err(e) => app_error(e),
    }
}
