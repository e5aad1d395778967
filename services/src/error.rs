use sea_orm::DbErr;
use thiserror::Error;

/// Machine-readable error codes surfaced to API clients.
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const ALREADY_ASSIGNED: &str = "ALREADY_ASSIGNED";
    pub const ASSIGNMENT_NOT_FOUND: &str = "ASSIGNMENT_NOT_FOUND";
    pub const ROUTE_OR_STUDENT_NOT_FOUND: &str = "ROUTE_OR_STUDENT_NOT_FOUND";
    pub const TOKEN_NOT_FOUND: &str = "TOKEN_NOT_FOUND";
    pub const USER_EXISTS: &str = "USER_EXISTS";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Error returned by every service operation.
///
/// Each variant knows its HTTP status and code, so the API layer can pass them
/// through verbatim. `Database` is the catch-all for unexpected store failures
/// and always maps to 500 / `INTERNAL_ERROR`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Unauthorized { code: &'static str, message: String },

    #[error("{message}")]
    NotFound { code: &'static str, message: String },

    #[error("{message}")]
    Conflict { code: &'static str, message: String },

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthorized { .. } => 401,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Database(_) => 500,
        }
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => codes::VALIDATION_ERROR,
            Self::Unauthorized { code, .. }
            | Self::NotFound { code, .. }
            | Self::Conflict { code, .. } => code,
            Self::Database(_) => codes::INTERNAL_ERROR,
        }
    }

    /// True for failures whose details must not reach the client.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
