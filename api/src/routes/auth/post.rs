use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use crate::routes::common::{app_error, format_validation_errors, json_rejection, validation_error};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{Model as UserModel, UserRole};
use db::repositories::user_repository::UserRepository;
use serde::{Deserialize, Serialize};
use services::error::codes;
use services::user::UserService;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub admin: bool,
}

impl From<UserModel> for UserResponse {
    fn from(user: UserModel) -> Self {
        Self {
            admin: user.is_admin(),
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

/// POST /api/auth/login
///
/// Authenticates a user and returns a JWT.
///
/// ### Request Body
/// ```json
/// { "username": "admin", "password": "password123" }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ token, expires_at, user }`
/// - `400 Bad Request` when a field is missing or empty
/// - `401 Unauthorized` with code `INVALID_CREDENTIALS`
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_error(format_validation_errors(&e));
    }

    let service = UserService::new(UserRepository::new(app_state.db_clone()));
    let user = match service.verify_credentials(&req.username, &req.password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!(username = %req.username, "failed login attempt");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<Option<()>>::error_with_code(
                    "Invalid username or password",
                    codes::INVALID_CREDENTIALS,
                )),
            )
                .into_response();
        }
        Err(e) => return app_error(e),
    };

    let (token, expires_at) = match generate_jwt(user.id, user.is_admin()) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, user = user.id, "failed to sign token");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Option<()>>::error_with_code(
                    "An internal error occurred",
                    codes::INTERNAL_ERROR,
                )),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            LoginResponse {
                token,
                expires_at,
                user: user.into(),
            },
            "Login successful",
        )),
    )
        .into_response()
}
