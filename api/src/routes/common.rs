//! Helpers shared by every route group.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::AppError;
use services::error::codes;
use validator::ValidationErrors;

/// Joins the messages of every failed field rule into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

pub fn validation_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<Option<()>>::error_with_code(
            message,
            codes::VALIDATION_ERROR,
        )),
    )
        .into_response()
}

/// Maps a body that could not be deserialized to a 400 in the usual envelope.
pub fn json_rejection(rejection: JsonRejection) -> Response {
    validation_error(format!("Invalid request body: {}", rejection.body_text()))
}

/// Turns a service error into its status and envelope.
///
/// Store failures are logged here and answered with a generic message.
pub fn app_error(err: AppError) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = if err.is_internal() {
        tracing::error!(error = %err, "request failed");
        "An internal error occurred".to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(ApiResponse::<Option<()>>::error_with_code(message, err.code())),
    )
        .into_response()
}
