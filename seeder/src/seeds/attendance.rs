use crate::seed::Seeder;
use chrono::{Duration, Utc};
use db::models::attendance::{self, AttendanceEvent};
use db::models::{rfid_card, route, route_assignment};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use services::AppError;
use std::collections::HashMap;

const DAYS: i64 = 5;

pub struct AttendanceSeeder;

#[async_trait::async_trait]
impl Seeder for AttendanceSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let bus_by_route: HashMap<i64, Option<i64>> = route::Entity::find()
            .all(db)
            .await?
            .into_iter()
            .map(|r| (r.id, r.bus_id))
            .collect();
        let card_by_student: HashMap<i64, i64> = rfid_card::Entity::find()
            .filter(rfid_card::Column::Active.eq(true))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.student_id, c.id))
            .collect();
        let assignments = route_assignment::Entity::find().all(db).await?;

        for day in 1..=DAYS {
            let morning = Utc::now() - Duration::days(day) - Duration::hours(2);
            for a in &assignments {
                // Occasional absence
                if fastrand::u8(..12) == 0 {
                    continue;
                }
                let bus_id = bus_by_route.get(&a.route_id).copied().flatten();
                let card = card_by_student.get(&a.student_id).copied();
                let board_at = morning + Duration::minutes(fastrand::i64(0..30));

                for (event, at) in [
                    (AttendanceEvent::Board, board_at),
                    (AttendanceEvent::Alight, board_at + Duration::minutes(fastrand::i64(10..40))),
                ] {
                    attendance::ActiveModel {
                        student_id: Set(a.student_id),
                        bus_id: Set(bus_id),
                        rfid_card_id: Set(card),
                        event: Set(event),
                        recorded_at: Set(at),
                        ..Default::default()
                    }
                    .insert(db)
                    .await?;
                }
            }
        }

        Ok(())
    }
}
