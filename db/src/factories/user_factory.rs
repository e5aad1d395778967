use crate::factories::next_seq;
use crate::models::user::{ActiveModel, Model, UserRole};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Inserts a user with the given role. The password hash is not a real hash.
pub async fn make(db: &DatabaseConnection, role: UserRole) -> Model {
    let n = next_seq();
    ActiveModel {
        username: Set(format!("{role}{n}")),
        email: Set(format!("{role}{n}@example.com")),
        password_hash: Set("not-a-hash".into()),
        role: Set(role),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create user")
}
