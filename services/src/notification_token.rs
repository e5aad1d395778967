//! Push-notification device tokens.
//!
//! A token identifies a browser or device, not a person, so it is keyed by the
//! token string alone. Registering a token that already exists moves it to the
//! calling user.

use crate::error::{AppError, codes};
use crate::service::{Service, ToActiveModel};
use db::filters::NotificationTokenFilter;
use db::models::notification_token::{ActiveModel, Entity, Model};
use db::repositories::notification_token_repository::NotificationTokenRepository;
use db::repositories::repository::Repository;
use sea_orm::{ActiveValue, IntoActiveModel, Set, SqlErr};

pub use db::models::notification_token::Model as NotificationToken;

/// Longest token accepted; FCM registration tokens are well under this.
pub const MAX_TOKEN_LEN: usize = 4096;

#[derive(Debug, Clone)]
pub struct RegisterToken {
    pub user_id: i64,
    pub token: String,
    pub platform: Option<String>,
}

impl ToActiveModel<Entity> for RegisterToken {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(AppError::validation("token cannot be empty"));
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(AppError::validation("token is too long"));
        }

        Ok(ActiveModel {
            user_id: Set(self.user_id),
            token: Set(token.to_string()),
            platform: Set(normalize_platform(self.platform)),
            ..Default::default()
        })
    }
}

fn normalize_platform(platform: Option<String>) -> Option<String> {
    platform
        .map(|p| p.trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
}

pub struct NotificationTokenService {
    repo: NotificationTokenRepository,
}

impl<'a> Service<'a, Entity, RegisterToken, NotificationTokenFilter, NotificationTokenRepository>
    for NotificationTokenService
{
    fn repository(&self) -> &NotificationTokenRepository {
        &self.repo
    }
}

impl NotificationTokenService {
    pub fn new(repo: NotificationTokenRepository) -> Self {
        Self { repo }
    }

    /// Stores `token` for the user, or re-binds an existing row to them.
    ///
    /// Two registrations of a new token can both miss the lookup; the one that
    /// loses the insert on the unique `token` index re-binds the winner's row.
    pub async fn register(&self, params: RegisterToken) -> Result<Model, AppError> {
        let user_id = params.user_id;
        let incoming = params.into_active_model()?;
        let token = match &incoming.token {
            ActiveValue::Set(token) => token.clone(),
            _ => return Err(AppError::validation("token cannot be empty")),
        };
        let platform = incoming.platform.clone();
        let by_token = NotificationTokenFilter::new().with_token(token.as_str());

        if let Some(row) = self.repo.find_one(&by_token, None).await? {
            return self.rebind(row, user_id, platform).await;
        }

        match self.repo.create(incoming).await {
            Ok(saved) => {
                tracing::info!(token_id = saved.id, user_id, "notification token registered");
                Ok(saved)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                tracing::debug!(user_id, "notification token inserted concurrently, re-binding");
                match self.repo.find_one(&by_token, None).await? {
                    Some(row) => self.rebind(row, user_id, platform).await,
                    None => Err(AppError::Database(err)),
                }
            }
            Err(err) => Err(AppError::Database(err)),
        }
    }

    async fn rebind(
        &self,
        row: Model,
        user_id: i64,
        platform: ActiveValue<Option<String>>,
    ) -> Result<Model, AppError> {
        let previous_owner = row.user_id;
        let mut am = row.into_active_model();
        am.user_id = Set(user_id);
        am.platform = platform;
        let saved = self.repo.update(am).await?;
        if previous_owner != user_id {
            tracing::info!(
                token_id = saved.id,
                from_user = previous_owner,
                to_user = user_id,
                "notification token moved to another user"
            );
        }
        Ok(saved)
    }

    /// Removes the caller's token. Tokens owned by someone else are invisible.
    pub async fn unregister(&self, user_id: i64, token: &str) -> Result<(), AppError> {
        let filter = NotificationTokenFilter::new()
            .with_user_id(user_id)
            .with_token(token.trim());

        let Some(row) = self.repo.find_one(&filter, None).await? else {
            return Err(AppError::not_found(
                codes::TOKEN_NOT_FOUND,
                "Notification token not found",
            ));
        };

        self.repo.delete(row.id).await?;
        tracing::info!(token_id = row.id, user_id, "notification token unregistered");
        Ok(())
    }

    /// The user's tokens, most recently refreshed first.
    pub async fn tokens_for_user(&self, user_id: i64) -> Result<Vec<Model>, AppError> {
        Ok(self
            .repo
            .find_all(&NotificationTokenFilter::new().with_user_id(user_id), None)
            .await?)
    }
}
