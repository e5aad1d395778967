use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::payment::{self, PaymentStatus};
use db::models::student;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use services::AppError;

/// Monthly transport fee.
const FEE: f64 = 45.0;

pub struct PaymentSeeder;

#[async_trait::async_trait]
impl Seeder for PaymentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let students = student::Entity::find().all(db).await?;

        for kid in students {
            for month in 0..3i64 {
                let created_at = Utc::now() - Duration::days(30 * month);
                // The current month is still open for most families
                let status = match (month, fastrand::u8(..10)) {
                    (0, 0..=6) => PaymentStatus::Pending,
                    (_, 0) => PaymentStatus::Failed,
                    _ => PaymentStatus::Paid,
                };
                let paid_at = (status == PaymentStatus::Paid)
                    .then(|| created_at + Duration::days(fastrand::i64(0..7)));

                payment::ActiveModel {
                    student_id: Set(kid.id),
                    amount: Set(FEE),
                    reference: Set(format!("PAY-{}-{}-{:06}", kid.id, month, fastrand::u32(..1_000_000))),
                    status: Set(status),
                    paid_at: Set(paid_at),
                    created_at: Set(created_at),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }
}
