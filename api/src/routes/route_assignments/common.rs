use db::models::route_assignment::Model as RouteAssignmentModel;
use serde::{Deserialize, Serialize};
use services::route_assignment::{AssignmentWithStudent, CreateRouteAssignment};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteAssignmentRequest {
    #[validate(required(message = "route_id is required"))]
    pub route_id: Option<i64>,

    #[validate(required(message = "student_id is required"))]
    pub student_id: Option<i64>,

    #[validate(range(min = -90.0, max = 90.0, message = "pickup_latitude must be between -90 and 90"))]
    pub pickup_latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "pickup_longitude must be between -180 and 180"))]
    pub pickup_longitude: Option<f64>,

    #[validate(range(min = 0, message = "pickup_order must not be negative"))]
    pub pickup_order: Option<i32>,
}

impl CreateRouteAssignmentRequest {
    /// `None` until both ids are present; call after `validate()`.
    pub fn into_params(self) -> Option<CreateRouteAssignment> {
        Some(CreateRouteAssignment {
            route_id: self.route_id?,
            student_id: self.student_id?,
            pickup_latitude: self.pickup_latitude,
            pickup_longitude: self.pickup_longitude,
            pickup_order: self.pickup_order,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RouteAssignmentResponse {
    pub id: i64,
    pub route_id: i64,
    pub student_id: i64,
    pub pickup_latitude: Option<f64>,
    pub pickup_longitude: Option<f64>,
    pub pickup_order: Option<i32>,
}

impl From<RouteAssignmentModel> for RouteAssignmentResponse {
    fn from(a: RouteAssignmentModel) -> Self {
        Self {
            id: a.id,
            route_id: a.route_id,
            student_id: a.student_id,
            pickup_latitude: a.pickup_latitude,
            pickup_longitude: a.pickup_longitude,
            pickup_order: a.pickup_order,
        }
    }
}

/// The assigned student's name and home pickup location.
#[derive(Debug, Serialize)]
pub struct AssignedStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub home_address: Option<String>,
    pub home_latitude: Option<f64>,
    pub home_longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RouteAssignmentWithStudentResponse {
    #[serde(flatten)]
    pub assignment: RouteAssignmentResponse,
    pub student: Option<AssignedStudent>,
}

impl From<AssignmentWithStudent> for RouteAssignmentWithStudentResponse {
    fn from(row: AssignmentWithStudent) -> Self {
        Self {
            assignment: row.assignment.into(),
            student: row.student.map(|s| AssignedStudent {
                id: s.id,
                first_name: s.first_name,
                last_name: s.last_name,
                home_address: s.home_address,
                home_latitude: s.home_latitude,
                home_longitude: s.home_longitude,
            }),
        }
    }
}
