pub mod notification_token_repository;
pub mod repository;
pub mod route_assignment_repository;
pub mod user_repository;
