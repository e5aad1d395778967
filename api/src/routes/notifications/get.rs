use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::app_error;
use crate::routes::notifications::common::NotificationTokenResponse;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::repositories::notification_token_repository::NotificationTokenRepository;
use services::notification_token::NotificationTokenService;
use util::state::AppState;

/// GET /api/notifications/tokens
///
/// Lists the caller's registered device tokens, most recently refreshed first.
pub async fn list_tokens(State(app_state): State<AppState>, AuthUser(claims): AuthUser) -> Response {
    let service = NotificationTokenService::new(NotificationTokenRepository::new(app_state.db_clone()));

    match service.tokens_for_user(claims.sub).await {
        Ok(tokens) => {
            let data: Vec<NotificationTokenResponse> = tokens.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Notification tokens retrieved")),
            )
                .into_response()
        }
        Err(e) => app_error(e),
    }
}
