use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, Select,
};
use std::future::Future;
use std::pin::Pin;

pub type RepoFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'a>>;

/// Generic data access over one SeaORM entity.
///
/// Implementors supply the connection and how a filter struct `F` narrows a
/// `Select<E>`; the CRUD operations come for free.
pub trait Repository<E, F>: Send + Sync
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    F: Sync,
{
    fn db(&self) -> &DatabaseConnection;

    fn apply_filter(query: Select<E>, filter: &F) -> Select<E>;

    fn apply_sorting(query: Select<E>, _sort_by: Option<String>) -> Select<E> {
        query
    }

    fn create<'a>(&'a self, active_model: E::ActiveModel) -> RepoFuture<'a, E::Model> {
        Box::pin(async move { active_model.insert(self.db()).await })
    }

    fn update<'a>(&'a self, active_model: E::ActiveModel) -> RepoFuture<'a, E::Model> {
        Box::pin(async move { active_model.update(self.db()).await })
    }

    /// Deletes by primary key and returns the number of rows removed.
    fn delete<'a>(
        &'a self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> RepoFuture<'a, u64> {
        Box::pin(async move {
            let result = E::delete_by_id(id).exec(self.db()).await?;
            Ok(result.rows_affected)
        })
    }

    fn find_by_id<'a>(
        &'a self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> RepoFuture<'a, Option<E::Model>> {
        Box::pin(async move { E::find_by_id(id).one(self.db()).await })
    }

    fn find_one<'a>(
        &'a self,
        filter: &'a F,
        sort_by: Option<String>,
    ) -> RepoFuture<'a, Option<E::Model>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            let query = Self::apply_sorting(query, sort_by);
            query.one(self.db()).await
        })
    }

    fn find_all<'a>(
        &'a self,
        filter: &'a F,
        sort_by: Option<String>,
    ) -> RepoFuture<'a, Vec<E::Model>> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            let query = Self::apply_sorting(query, sort_by);
            query.all(self.db()).await
        })
    }

    fn exists<'a>(&'a self, filter: &'a F) -> RepoFuture<'a, bool> {
        Box::pin(async move {
            let query = Self::apply_filter(E::find(), filter);
            Ok(query.one(self.db()).await?.is_some())
        })
    }
}

/// Shared helper so each repository narrows queries the same way.
pub(crate) fn filter_eq<E, C, V>(query: Select<E>, column: C, value: Option<V>) -> Select<E>
where
    E: EntityTrait,
    C: sea_orm::ColumnTrait,
    V: Into<sea_orm::Value>,
{
    match value {
        Some(v) => query.filter(column.eq(v)),
        None => query,
    }
}
