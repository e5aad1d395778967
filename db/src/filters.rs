use crate::models::user::UserRole;

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub role: Option<UserRole>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteAssignmentFilter {
    pub id: Option<i64>,
    pub route_id: Option<i64>,
    pub student_id: Option<i64>,
}

impl RouteAssignmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route_id(mut self, route_id: i64) -> Self {
        self.route_id = Some(route_id);
        self
    }

    pub fn with_student_id(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationTokenFilter {
    pub user_id: Option<i64>,
    pub token: Option<String>,
}

impl NotificationTokenFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
