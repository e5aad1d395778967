use crate::seed::Seeder;
use db::models::{route, student};
use db::repositories::route_assignment_repository::RouteAssignmentRepository;
use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, EntityTrait};
use services::AppError;
use services::route_assignment::{CreateRouteAssignment, RouteAssignmentService};
use services::service::Service;

pub struct RouteAssignmentSeeder;

#[async_trait::async_trait]
impl Seeder for RouteAssignmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let service = RouteAssignmentService::new(RouteAssignmentRepository::new(db.clone()));
        let routes = route::Entity::find().all(db).await?;
        if routes.is_empty() {
            return Ok(());
        }

        let mut students = student::Entity::find().all(db).await?;
        students.shuffle(&mut rand::thread_rng());

        // Deal students round-robin across routes; roughly one in five is
        // left without a stop position so unordered stops show up too.
        let mut next_stop = vec![1; routes.len()];
        for (i, kid) in students.iter().enumerate() {
            let slot = i % routes.len();
            let pickup_order = if fastrand::u8(..5) == 0 {
                None
            } else {
                let order = next_stop[slot];
                next_stop[slot] += 1;
                Some(order)
            };

            service
                .create(CreateRouteAssignment {
                    route_id: routes[slot].id,
                    student_id: kid.id,
                    pickup_latitude: kid.home_latitude,
                    pickup_longitude: kid.home_longitude,
                    pickup_order,
                })
                .await?;
        }

        Ok(())
    }
}
