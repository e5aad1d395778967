pub mod error;
pub mod notification_token;
pub mod route_assignment;
pub mod service;
pub mod user;

pub use error::AppError;
