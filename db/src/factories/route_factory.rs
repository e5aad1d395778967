use crate::factories::next_seq;
use crate::models::route::{ActiveModel, Model};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub async fn make(db: &DatabaseConnection) -> Model {
    let n = next_seq();
    ActiveModel {
        name: Set(format!("Route {n}")),
        description: Set(None),
        bus_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create route")
}
