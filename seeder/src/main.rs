use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    alcohol_test::AlcoholTestSeeder, attendance::AttendanceSeeder, bus::BusSeeder,
    driver_rating::DriverRatingSeeder, notification_token::NotificationTokenSeeder,
    payment::PaymentSeeder, rfid_card::RfidCardSeeder, route::RouteSeeder,
    route_assignment::RouteAssignmentSeeder, student::StudentSeeder, user::UserSeeder,
};
use colored::*;
use migration::{Migrator, MigratorTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "Could not open database:".red(), err);
            std::process::exit(1);
        }
    };
    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("{} {}", "Migration failed:".red(), err);
        std::process::exit(1);
    }

    // Order matters: later seeders read rows written by earlier ones
    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(BusSeeder), "Bus"),
        (Box::new(RouteSeeder), "Route"),
        (Box::new(RouteAssignmentSeeder), "RouteAssignment"),
        (Box::new(RfidCardSeeder), "RfidCard"),
        (Box::new(AttendanceSeeder), "Attendance"),
        (Box::new(PaymentSeeder), "Payment"),
        (Box::new(AlcoholTestSeeder), "AlcoholTest"),
        (Box::new(DriverRatingSeeder), "DriverRating"),
        (Box::new(NotificationTokenSeeder), "NotificationToken"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
