//! Assignment of students to bus routes.
//!
//! A student is assigned to a given route at most once. The unique index on
//! (`route_id`, `student_id`) is the source of truth; the lookup in
//! [`RouteAssignmentService::create`] only short-circuits the common case, and
//! a unique violation from a concurrent insert is reported the same way.

use crate::error::{AppError, codes};
use crate::service::{Service, ServiceFuture, ToActiveModel};
use db::filters::RouteAssignmentFilter;
use db::models::route_assignment::{ActiveModel, Entity, Model};
use db::models::student;
use db::repositories::repository::Repository;
use db::repositories::route_assignment_repository::RouteAssignmentRepository;
use sea_orm::{DbErr, Set, SqlErr};
use serde::Serialize;

pub use db::models::route_assignment::Model as RouteAssignment;

/// Fractional digits kept for pickup coordinates, matching the column scale.
pub const COORDINATE_SCALE: i32 = 8;

fn quantize(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_SCALE);
    (value * factor).round() / factor
}

#[derive(Debug, Clone)]
pub struct CreateRouteAssignment {
    pub route_id: i64,
    pub student_id: i64,
    pub pickup_latitude: Option<f64>,
    pub pickup_longitude: Option<f64>,
    /// Left NULL when absent; positions are never computed.
    pub pickup_order: Option<i32>,
}

impl ToActiveModel<Entity> for CreateRouteAssignment {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        if let Some(lat) = self.pickup_latitude {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(AppError::validation(format!(
                    "pickup_latitude {lat} is outside [-90, 90]"
                )));
            }
        }
        if let Some(lon) = self.pickup_longitude {
            if !(-180.0..=180.0).contains(&lon) {
                return Err(AppError::validation(format!(
                    "pickup_longitude {lon} is outside [-180, 180]"
                )));
            }
        }
        if matches!(self.pickup_order, Some(order) if order < 0) {
            return Err(AppError::validation("pickup_order must not be negative"));
        }

        Ok(ActiveModel {
            route_id: Set(self.route_id),
            student_id: Set(self.student_id),
            pickup_latitude: Set(self.pickup_latitude.map(quantize)),
            pickup_longitude: Set(self.pickup_longitude.map(quantize)),
            pickup_order: Set(self.pickup_order),
            ..Default::default()
        })
    }
}

/// An assignment together with the student it places on the route.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithStudent {
    pub assignment: Model,
    pub student: Option<student::Model>,
}

pub struct RouteAssignmentService {
    repo: RouteAssignmentRepository,
}

impl<'a> Service<'a, Entity, CreateRouteAssignment, RouteAssignmentFilter, RouteAssignmentRepository>
    for RouteAssignmentService
{
    fn repository(&self) -> &RouteAssignmentRepository {
        &self.repo
    }

    // ↓↓↓ OVERRIDE DEFAULT BEHAVIOR IF NEEDED HERE ↓↓↓

    fn create(&'a self, params: CreateRouteAssignment) -> ServiceFuture<'a, Model> {
        Box::pin(async move {
            let (route_id, student_id) = (params.route_id, params.student_id);
            let model = params.into_active_model()?;

            let pair = RouteAssignmentFilter::new()
                .with_route_id(route_id)
                .with_student_id(student_id);
            if self.repo.exists(&pair).await? {
                return Err(already_assigned(route_id, student_id));
            }

            match self.repo.create(model).await {
                Ok(created) => {
                    tracing::info!(
                        assignment_id = created.id,
                        route_id,
                        student_id,
                        "student assigned to route"
                    );
                    Ok(created)
                }
                Err(err) => Err(map_insert_error(err, route_id, student_id)),
            }
        })
    }
}

impl RouteAssignmentService {
    pub fn new(repo: RouteAssignmentRepository) -> Self {
        Self { repo }
    }

    // ↓↓↓ CUSTOM METHODS CAN BE DEFINED HERE ↓↓↓

    /// All assignments of a route with their students, in stop order.
    ///
    /// Assignments without a `pickup_order` are listed after ordered ones, by id.
    pub async fn get_assignments_by_route_id(
        &self,
        route_id: i64,
    ) -> Result<Vec<AssignmentWithStudent>, AppError> {
        let rows = self.repo.find_by_route_with_students(route_id).await?;
        Ok(rows
            .into_iter()
            .map(|(assignment, student)| AssignmentWithStudent {
                assignment,
                student,
            })
            .collect())
    }

    pub async fn get_route_assignment(&self, id: i64) -> Result<Model, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| assignment_not_found(id))
    }

    pub async fn delete_route_assignment(&self, id: i64) -> Result<(), AppError> {
        match self.repo.delete(id).await? {
            0 => Err(assignment_not_found(id)),
            _ => {
                tracing::info!(assignment_id = id, "route assignment deleted");
                Ok(())
            }
        }
    }
}

fn already_assigned(route_id: i64, student_id: i64) -> AppError {
    AppError::conflict(
        codes::ALREADY_ASSIGNED,
        format!("Student {student_id} is already assigned to route {route_id}"),
    )
}

fn assignment_not_found(id: i64) -> AppError {
    AppError::not_found(
        codes::ASSIGNMENT_NOT_FOUND,
        format!("Route assignment {id} not found"),
    )
}

/// Translates constraint violations raised by the store on insert.
fn map_insert_error(err: DbErr, route_id: i64, student_id: i64) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::warn!(route_id, student_id, "lost insert race for route assignment");
            already_assigned(route_id, student_id)
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::not_found(
            codes::ROUTE_OR_STUDENT_NOT_FOUND,
            format!("Route {route_id} or student {student_id} does not exist"),
        ),
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::factories::{route_factory, student_factory};
    use db::test_utils::setup_test_db;
    use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait};

    fn service(db: &DatabaseConnection) -> RouteAssignmentService {
        RouteAssignmentService::new(RouteAssignmentRepository::new(db.clone()))
    }

    fn params(route_id: i64, student_id: i64) -> CreateRouteAssignment {
        CreateRouteAssignment {
            route_id,
            student_id,
            pickup_latitude: None,
            pickup_longitude: None,
            pickup_order: None,
        }
    }

    #[tokio::test]
    async fn create_stores_coordinates_and_leaves_order_unset() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        let created = svc
            .create(CreateRouteAssignment {
                pickup_latitude: Some(40.71),
                pickup_longitude: Some(-74.00),
                ..params(route.id, kid.id)
            })
            .await
            .unwrap();

        assert_eq!(created.route_id, route.id);
        assert_eq!(created.student_id, kid.id);
        assert_eq!(created.pickup_latitude, Some(40.71));
        assert_eq!(created.pickup_longitude, Some(-74.0));
        assert_eq!(created.pickup_order, None);
    }

    #[tokio::test]
    async fn second_assignment_of_same_pair_conflicts_without_writing() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        let first = svc.create(params(route.id, kid.id)).await.unwrap();
        let err = svc
            .create(CreateRouteAssignment {
                pickup_order: Some(4),
                ..params(route.id, kid.id)
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), 409);
        assert_eq!(err.code(), codes::ALREADY_ASSIGNED);

        let rows = Entity::find().all(&db).await.unwrap();
        assert_eq!(rows, vec![first]);
    }

    #[tokio::test]
    async fn unique_violation_from_the_store_is_reported_as_already_assigned() {
        let err = map_insert_error(
            DbErr::Custom("not a constraint".into()),
            1,
            2,
        );
        assert!(err.is_internal());

        // Drive a real unique violation past the pre-check by inserting directly.
        let db = setup_test_db().await;
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;
        let repo = RouteAssignmentRepository::new(db.clone());
        let am = params(route.id, kid.id).into_active_model().unwrap();
        repo.create(am.clone()).await.unwrap();
        let raw = repo.create(am).await.unwrap_err();

        let err = map_insert_error(raw, route.id, kid.id);
        assert_eq!(err.status(), 409);
        assert_eq!(err.code(), codes::ALREADY_ASSIGNED);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let kid = student_factory::make(&db, None).await;

        let err = svc.create(params(424_242, kid.id)).await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.code(), codes::ROUTE_OR_STUDENT_NOT_FOUND);
    }

    #[tokio::test]
    async fn out_of_range_latitude_is_rejected() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        let err = svc
            .create(CreateRouteAssignment {
                pickup_latitude: Some(91.0),
                ..params(route.id, kid.id)
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalid_duplicate_is_a_validation_error_not_a_conflict() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        svc.create(params(route.id, kid.id)).await.unwrap();
        let err = svc
            .create(CreateRouteAssignment {
                pickup_latitude: Some(120.0),
                ..params(route.id, kid.id)
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), 400);
        assert_eq!(err.code(), codes::VALIDATION_ERROR);
    }

    #[tokio::test]
    async fn coordinates_are_stored_at_eight_decimal_places() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        let created = svc
            .create(CreateRouteAssignment {
                pickup_latitude: Some(40.712_345_678_9),
                pickup_longitude: Some(-74.123_456_789_123),
                ..params(route.id, kid.id)
            })
            .await
            .unwrap();
        assert_eq!(created.pickup_latitude, Some(40.71234568));
        assert_eq!(created.pickup_longitude, Some(-74.12345679));

        let listed = svc.get_assignments_by_route_id(route.id).await.unwrap();
        assert_eq!(listed[0].assignment.pickup_latitude, Some(40.71234568));
        assert_eq!(listed[0].assignment.pickup_longitude, Some(-74.12345679));
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_route_and_ordered() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let other = route_factory::make(&db).await;
        let a = student_factory::make(&db, None).await;
        let b = student_factory::make(&db, None).await;
        let c = student_factory::make(&db, None).await;

        let unordered = svc.create(params(route.id, a.id)).await.unwrap();
        let second = svc
            .create(CreateRouteAssignment {
                pickup_order: Some(2),
                ..params(route.id, b.id)
            })
            .await
            .unwrap();
        let first = svc
            .create(CreateRouteAssignment {
                pickup_order: Some(1),
                ..params(route.id, c.id)
            })
            .await
            .unwrap();
        svc.create(params(other.id, a.id)).await.unwrap();

        let listed = svc.get_assignments_by_route_id(route.id).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|r| r.assignment.id).collect();
        assert_eq!(ids, vec![first.id, second.id, unordered.id]);
        assert!(listed.iter().all(|r| r.assignment.route_id == route.id));

        let kid = listed[2].student.as_ref().expect("student joined");
        assert_eq!(kid.id, a.id);
        assert_eq!(kid.home_latitude, a.home_latitude);
    }

    #[tokio::test]
    async fn empty_route_lists_nothing() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;

        assert!(svc.get_assignments_by_route_id(route.id).await.unwrap().is_empty());
        assert!(svc.get_assignments_by_route_id(987_654).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_not_found() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        let created = svc.create(params(route.id, kid.id)).await.unwrap();
        svc.delete_route_assignment(created.id).await.unwrap();

        let err = svc.delete_route_assignment(created.id).await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.code(), codes::ASSIGNMENT_NOT_FOUND);

        // The pair is free again once deleted.
        svc.create(params(route.id, kid.id)).await.unwrap();
    }

    #[tokio::test]
    async fn deleting_the_student_cascades_to_assignments() {
        let db = setup_test_db().await;
        let svc = service(&db);
        let route = route_factory::make(&db).await;
        let kid = student_factory::make(&db, None).await;

        let created = svc.create(params(route.id, kid.id)).await.unwrap();
        kid.delete(&db).await.unwrap();

        let err = svc.get_route_assignment(created.id).await.unwrap_err();
        assert_eq!(err.code(), codes::ASSIGNMENT_NOT_FOUND);
    }
}
