use crate::response::ApiResponse;
use crate::routes::common::{app_error, format_validation_errors, json_rejection, validation_error};
use crate::routes::route_assignments::common::{CreateRouteAssignmentRequest, RouteAssignmentResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::repositories::route_assignment_repository::RouteAssignmentRepository;
use services::route_assignment::RouteAssignmentService;
use services::service::Service;
use util::state::AppState;
use validator::Validate;

/// POST /api/route-assignments
///
/// Assigns a student to a route. Admin-only.
///
/// ### Request Body
/// ```json
/// {
///   "route_id": 3,
///   "student_id": 7,
///   "pickup_latitude": 40.71,
///   "pickup_longitude": -74.00,
///   "pickup_order": null
/// }
/// ```
/// Only `route_id` and `student_id` are required. `pickup_order` is stored as
/// given and stays `null` when omitted.
///
/// ### Responses
/// - `201 Created` with the stored assignment
/// - `400 Bad Request` (`VALIDATION_ERROR`) for a missing id or out-of-range coordinate
/// - `404 Not Found` (`ROUTE_OR_STUDENT_NOT_FOUND`) when the route or student does not exist
/// - `409 Conflict` (`ALREADY_ASSIGNED`) when the student is already on the route
/// - `500 Internal Server Error` (`INTERNAL_ERROR`)
pub async fn create_route_assignment(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateRouteAssignmentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_error(format_validation_errors(&e));
    }
    let Some(params) = req.into_params() else {
        return validation_error("route_id and student_id are required");
    };

    let service = RouteAssignmentService::new(RouteAssignmentRepository::new(app_state.db_clone()));
    match service.create(params).await {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::<RouteAssignmentResponse>::success(
                assignment.into(),
                "Student assigned to route successfully",
            )),
        )
            .into_response(),
        Err(e) => app_error(e),
    }
}
