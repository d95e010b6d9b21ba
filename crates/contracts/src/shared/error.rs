use serde_json::Value;
use thiserror::Error;

/// Generic fallback shown when a call fails without a usable backend message.
pub const GENERIC_SERVER_ERROR: &str = "서버 오류가 발생했습니다";

/// Error taxonomy shared by every remote call and client-side check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Blocked before any network call (extension, empty field, duplicate code, template header).
    #[error("{0}")]
    Validation(String),

    /// The request never produced an HTTP response.
    #[error("네트워크 오류: {0}")]
    Network(String),

    /// Non-2xx status or an envelope with `success: false`.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Session expired or token rejected outside of the login call.
    #[error("인증이 만료되었습니다")]
    Unauthorized,

    /// Response body could not be decoded.
    #[error("응답 형식 오류: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Build a backend error from an error body, surfacing `detail` verbatim when present.
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_detail(&value))
            .unwrap_or_else(|| fallback.to_string());
        Self::backend(status, message)
    }

    /// Message carried by the backend, if this error came from one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Message to show the user: backend detail when present, otherwise the fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Backend { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull the human-readable message out of an error body.
///
/// Accepts `{"detail": "..."}`, `{"detail": {"message": "..."}}` and
/// `{"message": "..."}`.
pub fn extract_detail(value: &Value) -> Option<String> {
    match value.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Object(detail)) => {
            if let Some(Value::String(message)) = detail.get("message") {
                return Some(message.clone());
            }
        }
        _ => {}
    }
    match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_string_detail() {
        let body = json!({ "detail": "Excel 파일만 업로드 가능합니다." });
        assert_eq!(
            extract_detail(&body).as_deref(),
            Some("Excel 파일만 업로드 가능합니다.")
        );
    }

    #[test]
    fn test_extract_object_detail() {
        let body = json!({ "detail": { "message": "유효하지 않은 접속코드" } });
        assert_eq!(extract_detail(&body).as_deref(), Some("유효하지 않은 접속코드"));
    }

    #[test]
    fn test_from_error_body_falls_back() {
        let err = ApiError::from_error_body(500, "<html>oops</html>", "실패");
        assert_eq!(err, ApiError::backend(500, "실패"));

        let err = ApiError::from_error_body(400, r#"{"detail":"빈 파일입니다."}"#, "실패");
        assert_eq!(err.backend_message(), Some("빈 파일입니다."));
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Network("offline".into()).user_message("fallback"),
            "fallback"
        );
        assert_eq!(
            ApiError::backend(400, "detail").user_message("fallback"),
            "detail"
        );
        assert_eq!(
            ApiError::backend(400, "  ").user_message("fallback"),
            "fallback"
        );
        assert_eq!(
            ApiError::validation("empty").user_message("fallback"),
            "empty"
        );
    }
}
