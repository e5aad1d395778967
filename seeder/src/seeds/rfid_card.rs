use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::{rfid_card, student};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use services::AppError;

pub struct RfidCardSeeder;

#[async_trait::async_trait]
impl Seeder for RfidCardSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let students = student::Entity::find().all(db).await?;

        for kid in students {
            // Some students lost a card and were reissued one
            let cards = if fastrand::u8(..10) == 0 { 2 } else { 1 };
            for n in 0..cards {
                let uid: String = (0..4).map(|_| format!("{:02X}", fastrand::u8(..))).collect();
                rfid_card::ActiveModel {
                    uid: Set(format!("{uid}{:04X}", kid.id as u16)),
                    student_id: Set(kid.id),
                    active: Set(n + 1 == cards),
                    issued_at: Set(Utc::now() - Duration::days(30 * (cards - n) as i64)),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }
}
