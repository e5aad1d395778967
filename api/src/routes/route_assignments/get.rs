use crate::response::ApiResponse;
use crate::routes::common::app_error;
use crate::routes::route_assignments::common::RouteAssignmentWithStudentResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::repositories::route_assignment_repository::RouteAssignmentRepository;
use services::route_assignment::RouteAssignmentService;
use util::state::AppState;

/// GET /api/route-assignments/route/{route_id}
///
/// Lists the students assigned to a route in stop order. Assignments without a
/// `pickup_order` come last. An unknown or empty route yields an empty array.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": 12,
///       "route_id": 3,
///       "student_id": 7,
///       "pickup_latitude": 40.71,
///       "pickup_longitude": -74.0,
///       "pickup_order": 1,
///       "student": {
///         "id": 7,
///         "first_name": "Ada",
///         "last_name": "Lovelace",
///         "home_address": "12 Elm Street",
///         "home_latitude": 40.7128,
///         "home_longitude": -74.006
///       }
///     }
///   ],
///   "message": "Route assignments retrieved successfully"
/// }
/// ```
pub async fn get_assignments_by_route(
    State(app_state): State<AppState>,
    Path(route_id): Path<i64>,
) -> Response {
    let service = RouteAssignmentService::new(RouteAssignmentRepository::new(app_state.db_clone()));

    match service.get_assignments_by_route_id(route_id).await {
        Ok(rows) => {
            let data: Vec<RouteAssignmentWithStudentResponse> =
                rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    data,
                    "Route assignments retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => app_error(e),
    }
}
