//! Entity for the assignment of a student to a bus route.

use sea_orm::entity::prelude::*;

/// A student's seat on a route, with an optional pickup point and stop position.
///
/// The pair (`route_id`, `student_id`) is unique; the store enforces this with
/// the `uq_route_assignments_route_student` index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "route_assignments")]
pub struct Model {
    /// Primary key for the assignment.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Route the student rides. Cascade-deleted with the route.
    pub route_id: i64,

    /// Assigned student. Cascade-deleted with the student.
    pub student_id: i64,

    /// Pickup latitude, decimal(10,8).
    #[sea_orm(column_type = "Decimal(Some((10, 8)))", nullable)]
    pub pickup_latitude: Option<f64>,

    /// Pickup longitude, decimal(11,8).
    #[sea_orm(column_type = "Decimal(Some((11, 8)))", nullable)]
    pub pickup_longitude: Option<f64>,

    /// Ordinal stop position along the route. Set manually; never renumbered.
    pub pickup_order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::route::Entity",
        from = "Column::RouteId",
        to = "super::route::Column::Id",
        on_delete = "Cascade"
    )]
    Route,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::route::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Route.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
