use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{app_error, format_validation_errors, json_rejection, validation_error};
use crate::routes::notifications::common::{NotificationTokenResponse, RegisterTokenRequest};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::repositories::notification_token_repository::NotificationTokenRepository;
use services::notification_token::{NotificationTokenService, RegisterToken};
use util::state::AppState;
use validator::Validate;

/// POST /api/notifications/tokens
///
/// Registers the caller's device token. Registering a token that is already
/// known moves it to the caller and refreshes it.
///
/// ### Request Body
/// ```json
/// { "token": "fcm-registration-token", "platform": "web" }
/// ```
///
/// ### Responses
/// - `200 OK` with the stored token
/// - `400 Bad Request` (`VALIDATION_ERROR`)
pub async fn register_token(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    payload: Result<Json<RegisterTokenRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_error(format_validation_errors(&e));
    }

    let service = NotificationTokenService::new(NotificationTokenRepository::new(app_state.db_clone()));
    match service
        .register(RegisterToken {
            user_id: claims.sub,
            token: req.token,
            platform: req.platform,
        })
        .await
    {
        Ok(token) => (
            StatusCode::OK,
            Json(ApiResponse::<NotificationTokenResponse>::success(
                token.into(),
                "Notification token registered",
            )),
        )
            .into_response(),
        Err(e) => app_error(e),
    }
}
