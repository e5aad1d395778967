use crate::filters::UserFilter;
use crate::models::user::{Column, Entity};
use crate::repositories::repository::{Repository, filter_eq};
use sea_orm::{DatabaseConnection, QueryOrder, Select};

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Repository<Entity, UserFilter> for UserRepository {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn apply_filter(query: Select<Entity>, filter: &UserFilter) -> Select<Entity> {
        let query = filter_eq(query, Column::Id, filter.id);
        let query = filter_eq(query, Column::Username, filter.username.clone());
        filter_eq(query, Column::Role, filter.role)
    }

    fn apply_sorting(query: Select<Entity>, sort_by: Option<String>) -> Select<Entity> {
        let Some(sort) = sort_by else {
            return query;
        };
        let (column, asc) = match sort.strip_prefix('-') {
            Some(rest) => (rest, false),
            None => (sort.as_str(), true),
        };
        let column = match column {
            "id" => Column::Id,
            "username" => Column::Username,
            "email" => Column::Email,
            "created_at" => Column::CreatedAt,
            _ => return query,
        };
        if asc {
            query.order_by_asc(column)
        } else {
            query.order_by_desc(column)
        }
    }
}
