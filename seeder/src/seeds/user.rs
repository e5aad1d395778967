use crate::seed::Seeder;
use db::models::user::UserRole;
use db::repositories::user_repository::UserRepository;
use fake::{Fake, faker::internet::en::SafeEmail};
use sea_orm::DatabaseConnection;
use services::AppError;
use services::service::Service;
use services::user::{CreateUser, UserService};

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let service = UserService::new(UserRepository::new(db.clone()));

        // Fixed admin for logging into the dashboard
        service
            .create(CreateUser {
                username: "admin".into(),
                email: "admin@example.com".into(),
                password: "password123".into(),
                role: UserRole::Admin,
            })
            .await?;

        for (role, count) in [(UserRole::Driver, 6), (UserRole::Parent, 20)] {
            for i in 1..=count {
                let username = format!("{role}{i:03}");
                let email: String = SafeEmail().fake();
                service
                    .create(CreateUser {
                        username,
                        email: format!("{role}{i}.{email}"),
                        password: "password123".into(),
                        role,
                    })
                    .await?;
            }
        }

        Ok(())
    }
}
