use crate::error::AppError;
use db::repositories::repository::Repository;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};
use std::future::Future;
use std::pin::Pin;

pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'a>>;

/// Converts a create-params struct into an insertable active model,
/// validating it on the way.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> Result<E::ActiveModel, AppError>;
}

/// Default service behaviour over a repository.
///
/// `C` is the create-params type and `F` the filter type of repository `R`.
/// Override a method in the impl block when an entity needs more than plain
/// persistence.
pub trait Service<'a, E, C, F, R>: Send + Sync
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    C: ToActiveModel<E> + Send + 'static,
    F: Send + Sync + 'static,
    R: Repository<E, F> + 'static,
{
    fn repository(&self) -> &R;

    fn create(&'a self, params: C) -> ServiceFuture<'a, E::Model> {
        Box::pin(async move {
            let model = params.into_active_model()?;
            Ok(self.repository().create(model).await?)
        })
    }

    fn find_by_id(
        &'a self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> ServiceFuture<'a, Option<E::Model>> {
        Box::pin(async move { Ok(self.repository().find_by_id(id).await?) })
    }

    fn find_one(&'a self, filter: F) -> ServiceFuture<'a, Option<E::Model>> {
        Box::pin(async move { Ok(self.repository().find_one(&filter, None).await?) })
    }

    fn find_all(
        &'a self,
        filter: F,
        sort_by: Option<String>,
    ) -> ServiceFuture<'a, Vec<E::Model>> {
        Box::pin(async move { Ok(self.repository().find_all(&filter, sort_by).await?) })
    }

    fn exists(&'a self, filter: F) -> ServiceFuture<'a, bool> {
        Box::pin(async move { Ok(self.repository().exists(&filter).await?) })
    }
}
