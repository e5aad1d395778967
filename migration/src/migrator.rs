use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601050001_create_users::Migration),
            Box::new(migrations::m202601050002_create_students::Migration),
            Box::new(migrations::m202601050003_create_buses::Migration),
            Box::new(migrations::m202601050004_create_routes::Migration),
            Box::new(migrations::m202601050005_create_route_assignments::Migration),
            Box::new(migrations::m202601050006_create_rfid_cards::Migration),
            Box::new(migrations::m202601050007_create_attendances::Migration),
            Box::new(migrations::m202601050008_create_payments::Migration),
            Box::new(migrations::m202601050009_create_alcohol_tests::Migration),
            Box::new(migrations::m202601050010_create_driver_ratings::Migration),
            Box::new(migrations::m202601050011_create_notification_tokens::Migration),
        ]
    }
}
