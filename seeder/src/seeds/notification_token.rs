use super::user_ids_with_role;
use crate::seed::Seeder;
use db::models::user::UserRole;
use db::repositories::notification_token_repository::NotificationTokenRepository;
use sea_orm::DatabaseConnection;
use services::AppError;
use services::notification_token::{NotificationTokenService, RegisterToken};

pub struct NotificationTokenSeeder;

#[async_trait::async_trait]
impl Seeder for NotificationTokenSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let service = NotificationTokenService::new(NotificationTokenRepository::new(db.clone()));

        for user_id in user_ids_with_role(db, UserRole::Parent).await? {
            let token: String = (0..40).map(|_| fastrand::alphanumeric()).collect();
            let platform = ["web", "android", "ios"][fastrand::usize(..3)];
            service
                .register(RegisterToken {
                    user_id,
                    token: format!("dev-{user_id}-{token}"),
                    platform: Some(platform.into()),
                })
                .await?;
        }

        Ok(())
    }
}
