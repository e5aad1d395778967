use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{app_error, format_validation_errors, json_rejection, validation_error};
use crate::routes::notifications::common::UnregisterTokenRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::repositories::notification_token_repository::NotificationTokenRepository;
use services::notification_token::NotificationTokenService;
use util::state::AppState;
use validator::Validate;

/// DELETE /api/notifications/tokens
///
/// Removes one of the caller's device tokens, typically on sign-out.
///
/// ### Request Body
/// ```json
/// { "token": "fcm-registration-token" }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` (`TOKEN_NOT_FOUND`) if the caller has no such token
pub async fn unregister_token(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
    payload: Result<Json<UnregisterTokenRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_error(format_validation_errors(&e));
    }

    let service = NotificationTokenService::new(NotificationTokenRepository::new(app_state.db_clone()));
    match service.unregister(claims.sub, &req.token).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<Option<()>>::success(
                None,
                "Notification token removed",
            )),
        )
            .into_response(),
        Err(e) => app_error(e),
    }
}
