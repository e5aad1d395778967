use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use strum::{Display, EnumString};

/// One boarding or alighting event for a student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub bus_id: Option<i64>,
    /// Card that produced the event; `None` for manual entries.
    pub rfid_card_id: Option<i64>,
    pub event: AttendanceEvent,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AttendanceEvent {
    #[sea_orm(string_value = "board")]
    Board,
    #[sea_orm(string_value = "alight")]
    Alight,
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
    #[sea_orm(
        belongs_to = "super::bus::Entity",
        from = "Column::BusId",
        to = "super::bus::Column::Id",
        on_delete = "SetNull"
    )]
    Bus,
    #[sea_orm(
        belongs_to = "super::rfid_card::Entity",
        from = "Column::RfidCardId",
        to = "super::rfid_card::Column::Id",
        on_delete = "SetNull"
    )]
    RfidCard,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
