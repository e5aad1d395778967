use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// RFID card carried by a student and tapped on the bus reader.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "rfid_cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Hex UID as read from the card.
    #[sea_orm(unique)]
    pub uid: String,
    pub student_id: i64,
    pub active: bool,
    pub issued_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
