pub mod alcohol_test;
pub mod attendance;
pub mod bus;
pub mod driver_rating;
pub mod notification_token;
pub mod payment;
pub mod rfid_card;
pub mod route;
pub mod route_assignment;
pub mod student;
pub mod user;

pub use bus::Entity as Bus;
pub use notification_token::Entity as NotificationToken;
pub use route::Entity as Route;
pub use route_assignment::Entity as RouteAssignment;
pub use student::Entity as Student;
pub use user::Entity as User;
