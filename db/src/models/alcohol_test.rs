use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Legal limit for bus drivers, mg/L breath alcohol.
pub const PASS_THRESHOLD_MG_L: f64 = 0.05;

/// Pre-shift breathalyser result for a driver.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "alcohol_tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub driver_id: i64,
    pub bus_id: Option<i64>,
    #[sea_orm(column_type = "Decimal(Some((5, 3)))")]
    pub reading: f64,
    pub passed: bool,
    pub tested_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DriverId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Driver,
    #[sea_orm(
        belongs_to = "super::bus::Entity",
        from = "Column::BusId",
        to = "super::bus::Column::Id",
        on_delete = "SetNull"
    )]
    Bus,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether a raw reading is within the legal limit.
    pub fn reading_passes(reading: f64) -> bool {
        reading < PASS_THRESHOLD_MG_L
    }
}
