use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Student 7 is already assigned to route 3",
///   "code": "ALREADY_ASSIGNED"
/// }
/// ```
///
/// `code` is only present on failures raised by the service layer, so clients
/// can branch on it without parsing `message`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            code: None,
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
            code: None,
        }
    }

    /// Like [`ApiResponse::error`], tagged with a machine-readable code.
    pub fn error_with_code(message: impl Into<String>, code: &'static str) -> Self
    where
        T: Default,
    {
        Self {
            code: Some(code),
            ..Self::error(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn code_is_omitted_on_success() {
        let body = serde_json::to_value(ApiResponse::success(5, "ok")).unwrap();
        assert_eq!(body, json!({ "success": true, "data": 5, "message": "ok" }));
    }

    #[test]
    fn error_with_code_serializes_code() {
        let body = serde_json::to_value(ApiResponse::<Option<()>>::error_with_code(
            "gone",
            "ASSIGNMENT_NOT_FOUND",
        ))
        .unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["data"], serde_json::Value::Null);
        assert_eq!(body["code"], "ASSIGNMENT_NOT_FOUND");
    }
}
