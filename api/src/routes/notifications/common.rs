use db::models::notification_token::Model as NotificationTokenModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterTokenRequest {
    #[validate(length(min = 1, max = 4096, message = "token must be between 1 and 4096 characters"))]
    pub token: String,
    #[validate(length(max = 32, message = "platform is too long"))]
    pub platform: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UnregisterTokenRequest {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct NotificationTokenResponse {
    pub id: i64,
    pub token: String,
    pub platform: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<NotificationTokenModel> for NotificationTokenResponse {
    fn from(t: NotificationTokenModel) -> Self {
        Self {
            id: t.id,
            token: t.token,
            platform: t.platform,
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}
