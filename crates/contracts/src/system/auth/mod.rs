use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::shared::error::{ApiError, GENERIC_SERVER_ERROR};

/// Path of the access-code login call. A 401 from it belongs to the login form.
pub const VALIDATE_PATH: &str = "/api/v1/auth/validate";

/// `localStorage` key holding the serialized [`SessionState`].
pub const SESSION_STORAGE_KEY: &str = "auth";

pub const INVALID_CODE_MESSAGE: &str = "유효하지 않은 접속코드입니다";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateCodeRequest {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateCodeResponse {
    #[serde(rename = "accessCode")]
    pub access_code: String,
    pub role: Role,
    pub access_token: String,
    pub token_type: String,
    #[serde(rename = "expiresAt", default)]
    pub expires_at: Option<String>,
}

/// Session held in context and mirrored to `localStorage` while authenticated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    #[serde(rename = "accessCode")]
    pub access_code: Option<String>,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    pub role: Option<Role>,
    pub error: Option<String>,
}

impl SessionState {
    pub fn authenticated(response: ValidateCodeResponse) -> Self {
        Self {
            is_authenticated: true,
            access_code: Some(response.access_code),
            access_token: Some(response.access_token),
            role: Some(response.role),
            error: None,
        }
    }

    /// Failed login: previous fields stay, the session is not authenticated.
    pub fn failed(previous: &SessionState, message: impl Into<String>) -> Self {
        Self {
            is_authenticated: false,
            error: Some(message.into()),
            ..previous.clone()
        }
    }

    pub fn bearer(&self) -> Option<String> {
        if !self.is_authenticated {
            return None;
        }
        self.access_token
            .as_ref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.role == Some(Role::Admin)
    }

    /// Decode a persisted session. Corrupt or unauthenticated values read as logged out.
    pub fn restore(raw: Option<&str>) -> Self {
        raw.and_then(|json| serde_json::from_str::<SessionState>(json).ok())
            .filter(|state| state.is_authenticated && state.access_token.is_some())
            .unwrap_or_default()
    }
}

/// Message for a failed login attempt.
///
/// `success:false` means the code was rejected; a backend error carries its
/// own detail; anything else is a generic server error.
pub fn login_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Backend { status: 200, .. } => INVALID_CODE_MESSAGE.to_string(),
        ApiError::Backend { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => GENERIC_SERVER_ERROR.to_string(),
    }
}

/// Whether a 401 on `path` should end the session.
///
/// Login attempts keep their error for the form; every other call logs out.
pub fn should_force_logout(path: &str, status: u16) -> bool {
    status == 401 && !path.contains(VALIDATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> ValidateCodeResponse {
        ValidateCodeResponse {
            access_code: "CL-001".into(),
            role: Role::Client,
            access_token: "tok".into(),
            token_type: "bearer".into(),
            expires_at: None,
        }
    }

    #[test]
    fn test_validate_response_wire_names() {
        let json = r#"{"accessCode":"A1","role":"admin","access_token":"t","token_type":"bearer"}"#;
        let parsed: ValidateCodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_code, "A1");
        assert_eq!(parsed.role, Role::Admin);
    }

    #[test]
    fn test_session_round_trip_through_storage() {
        let session = SessionState::authenticated(response());
        let stored = serde_json::to_string(&session).unwrap();
        assert!(stored.contains("\"accessToken\":\"tok\""));
        assert_eq!(SessionState::restore(Some(&stored)), session);
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok"));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_restore_discards_corrupt_value() {
        assert_eq!(SessionState::restore(Some("{not json")), SessionState::default());
        assert_eq!(SessionState::restore(None), SessionState::default());
        let logged_out = serde_json::to_string(&SessionState::default()).unwrap();
        assert_eq!(SessionState::restore(Some(&logged_out)), SessionState::default());
    }

    #[test]
    fn test_failed_keeps_previous_fields() {
        let previous = SessionState {
            access_code: Some("OLD".into()),
            ..SessionState::default()
        };
        let failed = SessionState::failed(&previous, INVALID_CODE_MESSAGE);
        assert!(!failed.is_authenticated);
        assert_eq!(failed.access_code.as_deref(), Some("OLD"));
        assert_eq!(failed.error.as_deref(), Some(INVALID_CODE_MESSAGE));
        assert!(failed.bearer().is_none());
    }

    #[test]
    fn test_login_failure_message() {
        assert_eq!(
            login_failure_message(&ApiError::backend(200, "whatever")),
            INVALID_CODE_MESSAGE
        );
        assert_eq!(
            login_failure_message(&ApiError::backend(401, "만료된 코드")),
            "만료된 코드"
        );
        assert_eq!(
            login_failure_message(&ApiError::Network("down".into())),
            GENERIC_SERVER_ERROR
        );
    }

    #[test]
    fn test_should_force_logout() {
        assert!(should_force_logout("/api/v1/accounts/", 401));
        assert!(!should_force_logout("/api/v1/auth/validate", 401));
        assert!(!should_force_logout("/api/v1/accounts/", 403));
    }
}
