use super::user_ids_with_role;
use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::driver_rating;
use db::models::user::UserRole;
use fake::{Fake, faker::lorem::en::Sentence};
use rand::seq::SliceRandom;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use services::AppError;

pub struct DriverRatingSeeder;

#[async_trait::async_trait]
impl Seeder for DriverRatingSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let drivers = user_ids_with_role(db, UserRole::Driver).await?;
        let parents = user_ids_with_role(db, UserRole::Parent).await?;

        for parent_id in parents {
            let Some(&driver_id) = drivers.choose(&mut rand::thread_rng()) else {
                break;
            };
            if fastrand::bool() {
                continue;
            }
            let feedback: Option<String> = fastrand::bool().then(|| Sentence(4..10).fake());

            driver_rating::ActiveModel {
                driver_id: Set(driver_id),
                parent_id: Set(parent_id),
                rating: Set(fastrand::i32(3..=5)),
                feedback: Set(feedback),
                created_at: Set(Utc::now() - Duration::days(fastrand::i64(0..60))),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }
}
