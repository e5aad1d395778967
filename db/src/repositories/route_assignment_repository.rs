use crate::filters::RouteAssignmentFilter;
use crate::models::route_assignment::{Column, Entity, Model};
use crate::models::student;
use crate::repositories::repository::{Repository, filter_eq};
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, Select,
};

pub struct RouteAssignmentRepository {
    db: DatabaseConnection,
}

impl RouteAssignmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assignments of one route joined with their students, in stop order.
    ///
    /// Rows without a `pickup_order` come after every ordered stop; ties are
    /// broken by assignment id so the sequence is stable.
    pub async fn find_by_route_with_students(
        &self,
        route_id: i64,
    ) -> Result<Vec<(Model, Option<student::Model>)>, DbErr> {
        Self::in_stop_order(Entity::find().filter(Column::RouteId.eq(route_id)))
            .find_also_related(student::Entity)
            .all(&self.db)
            .await
    }

    fn in_stop_order(query: Select<Entity>) -> Select<Entity> {
        query
            .order_by_with_nulls(Column::PickupOrder, Order::Asc, NullOrdering::Last)
            .order_by_asc(Column::Id)
    }
}

impl Repository<Entity, RouteAssignmentFilter> for RouteAssignmentRepository {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn apply_filter(query: Select<Entity>, filter: &RouteAssignmentFilter) -> Select<Entity> {
        let query = filter_eq(query, Column::Id, filter.id);
        let query = filter_eq(query, Column::RouteId, filter.route_id);
        filter_eq(query, Column::StudentId, filter.student_id)
    }

    fn apply_sorting(query: Select<Entity>, sort_by: Option<String>) -> Select<Entity> {
        match sort_by.as_deref() {
            Some("pickup_order") => Self::in_stop_order(query),
            Some("-id") => query.order_by_desc(Column::Id),
            _ => query.order_by_asc(Column::Id),
        }
    }
}
