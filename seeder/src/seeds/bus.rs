use super::user_ids_with_role;
use crate::seed::Seeder;
use db::models::bus::{self, BusStatus};
use db::models::user::UserRole;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use services::AppError;

pub struct BusSeeder;

#[async_trait::async_trait]
impl Seeder for BusSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let drivers = user_ids_with_role(db, UserRole::Driver).await?;

        // One bus per driver plus a spare in the workshop
        for (i, driver_id) in drivers.iter().map(|id| Some(*id)).chain([None]).enumerate() {
            let status = match driver_id {
                Some(_) => BusStatus::Active,
                None => BusStatus::Maintenance,
            };
            bus::ActiveModel {
                plate_number: Set(format!("SB-{:04}", 1001 + i)),
                capacity: Set([24, 36, 48][fastrand::usize(..3)]),
                driver_id: Set(driver_id),
                status: Set(status),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }
}
