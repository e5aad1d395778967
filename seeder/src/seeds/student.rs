use super::{near_depot, user_ids_with_role};
use crate::seed::Seeder;
use db::models::student;
use db::models::user::UserRole;
use fake::{
    Fake,
    faker::address::en::{BuildingNumber, StreetName},
    faker::name::en::{FirstName, LastName},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use services::AppError;

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let parents = user_ids_with_role(db, UserRole::Parent).await?;

        for parent_id in parents {
            // One to three children per family, sharing a surname and address
            let last_name: String = LastName().fake();
            let address = format!(
                "{} {}",
                BuildingNumber().fake::<String>(),
                StreetName().fake::<String>()
            );
            let (lat, lon) = near_depot();

            for _ in 0..fastrand::usize(1..=3) {
                student::ActiveModel {
                    parent_id: Set(Some(parent_id)),
                    first_name: Set(FirstName().fake()),
                    last_name: Set(last_name.clone()),
                    grade: Set(Some(fastrand::u8(1..=12).to_string())),
                    home_address: Set(Some(address.clone())),
                    home_latitude: Set(Some(lat)),
                    home_longitude: Set(Some(lon)),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }
}
