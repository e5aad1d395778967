use crate::filters::NotificationTokenFilter;
use crate::models::notification_token::{Column, Entity};
use crate::repositories::repository::{Repository, filter_eq};
use sea_orm::{DatabaseConnection, QueryOrder, Select};

pub struct NotificationTokenRepository {
    db: DatabaseConnection,
}

impl NotificationTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Repository<Entity, NotificationTokenFilter> for NotificationTokenRepository {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn apply_filter(query: Select<Entity>, filter: &NotificationTokenFilter) -> Select<Entity> {
        let query = filter_eq(query, Column::UserId, filter.user_id);
        filter_eq(query, Column::Token, filter.token.clone())
    }

    /// Newest registrations first unless `created_at` is requested explicitly.
    fn apply_sorting(query: Select<Entity>, sort_by: Option<String>) -> Select<Entity> {
        match sort_by.as_deref() {
            Some("created_at") => query.order_by_asc(Column::CreatedAt),
            _ => query
                .order_by_desc(Column::UpdatedAt)
                .order_by_desc(Column::Id),
        }
    }
}
