pub mod m202601050001_create_users;
pub mod m202601050002_create_students;
pub mod m202601050003_create_buses;
pub mod m202601050004_create_routes;
pub mod m202601050005_create_route_assignments;
pub mod m202601050006_create_rfid_cards;
pub mod m202601050007_create_attendances;
pub mod m202601050008_create_payments;
pub mod m202601050010_create_driver_ratings;
pub mod m202601050011_create_notification_tokens;
