mod auth_test;
mod health_test;
mod notifications_test;
mod route_assignments;
