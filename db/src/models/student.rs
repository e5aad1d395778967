use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// A child who rides the bus. Optionally linked to a parent account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub parent_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub grade: Option<String>,
    pub home_address: Option<String>,
    /// Default pickup point, usually the home address.
    #[sea_orm(column_type = "Decimal(Some((10, 8)))", nullable)]
    pub home_latitude: Option<f64>,
    #[sea_orm(column_type = "Decimal(Some((11, 8)))", nullable)]
    pub home_longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ParentId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Parent,
    #[sea_orm(has_many = "super::route_assignment::Entity")]
    RouteAssignments,
    #[sea_orm(has_many = "super::rfid_card::Entity")]
    RfidCards,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parent.def()
    }
}

impl Related<super::route_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RouteAssignments.def()
    }
}

impl Related<super::rfid_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfidCards.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
