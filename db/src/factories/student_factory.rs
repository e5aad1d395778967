use crate::factories::next_seq;
use crate::models::student::{ActiveModel, Model};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Inserts a student with a home pickup location.
pub async fn make(db: &DatabaseConnection, parent_id: Option<i64>) -> Model {
    let n = next_seq();
    ActiveModel {
        parent_id: Set(parent_id),
        first_name: Set(format!("Student{n}")),
        last_name: Set("Test".into()),
        grade: Set(Some("5".into())),
        home_address: Set(Some(format!("{n} Main Street"))),
        home_latitude: Set(Some(40.7128)),
        home_longitude: Set(Some(-74.006)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create student")
}
