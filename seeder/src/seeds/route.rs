use crate::seed::Seeder;
use db::models::{bus, route};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use services::AppError;

const ROUTE_NAMES: [&str; 4] = ["North Loop", "Riverside", "Hillcrest", "Old Town"];

pub struct RouteSeeder;

#[async_trait::async_trait]
impl Seeder for RouteSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let buses = bus::Entity::find().all(db).await?;

        for (i, name) in ROUTE_NAMES.iter().enumerate() {
            route::ActiveModel {
                name: Set(name.to_string()),
                description: Set(Some(format!("Morning and afternoon runs for the {name} area"))),
                bus_id: Set(buses.get(i).map(|b| b.id)),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        Ok(())
    }
}
