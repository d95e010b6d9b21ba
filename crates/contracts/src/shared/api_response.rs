use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;

/// `{success, data, message}` envelope returned by the REST backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    /// Row-level messages attached to a rejected request (`data.validation_errors`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            validation_errors: Vec::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            validation_errors: Vec::new(),
        }
    }

    /// Data of a successful response, or a backend error carrying the envelope message.
    pub fn into_result(self, fallback: &str) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::backend(
                200,
                self.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            )),
        }
    }

    /// For calls whose payload is ignored (delete, generic upload): only `success` counts.
    pub fn into_ack(self, fallback: &str) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        Err(ApiError::backend(
            200,
            self.message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Normalize any 2xx body into an envelope.
    ///
    /// Objects carrying a `success` key are already envelopes; anything else
    /// (bare arrays, bare objects) is wrapped as a successful response.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        let is_envelope = body
            .as_object()
            .map(|obj| obj.contains_key("success"))
            .unwrap_or(false);

        if !is_envelope {
            let data = decode_data::<T>(body)?;
            return Ok(Self {
                success: true,
                data,
                message: None,
                validation_errors: Vec::new(),
            });
        }

        let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let raw_data = body.get("data").cloned().unwrap_or(Value::Null);

        if success {
            return Ok(Self {
                success,
                data: decode_data::<T>(raw_data)?,
                message,
                validation_errors: Vec::new(),
            });
        }

        // A rejected envelope may carry data of a different shape; only the
        // validation messages are kept.
        let validation_errors = raw_data
            .get("validation_errors")
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .map(|e| match e {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            success,
            data: None,
            message,
            validation_errors,
        })
    }
}

fn decode_data<T: DeserializeOwned>(raw: Value) -> Result<Option<T>, ApiError> {
    if raw.is_null() {
        return Ok(None);
    }
    serde_json::from_value::<T>(raw)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_envelope_passes_through() {
        let body = json!({ "success": true, "data": [{ "id": 1 }], "message": "ok" });
        let response = ApiResponse::<Vec<Item>>::from_body(body).unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(vec![Item { id: 1 }]));
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_bare_body_is_wrapped() {
        let body = json!([{ "id": 7 }, { "id": 8 }]);
        let response = ApiResponse::<Vec<Item>>::from_body(body).unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().len(), 2);
    }

    #[test]
    fn test_rejected_envelope_keeps_validation_errors() {
        let body = json!({
            "success": false,
            "message": "템플릿 양식 검증 실패",
            "data": { "filename": "a.xlsx", "validation_errors": ["컬럼명이 일치하지 않습니다"] }
        });
        let response = ApiResponse::<Vec<Item>>::from_body(body).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.validation_errors, vec!["컬럼명이 일치하지 않습니다"]);
    }

    #[test]
    fn test_undecodable_data_is_an_error() {
        let body = json!({ "success": true, "data": { "id": "not-a-number" } });
        let result = ApiResponse::<Item>::from_body(body);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_into_result() {
        let ok: ApiResponse<i32> = ApiResponse::ok(5);
        assert_eq!(ok.into_result("x"), Ok(5));

        let failed: ApiResponse<i32> = ApiResponse::failed("");
        assert_eq!(failed.into_result("기본"), Err(ApiError::backend(200, "기본")));
    }

    #[test]
    fn test_into_ack_ignores_missing_data() {
        let body = json!({ "success": true, "data": null });
        let response = ApiResponse::<Value>::from_body(body).unwrap();
        assert_eq!(response.into_ack("x"), Ok(()));

        let failed: ApiResponse<Value> = ApiResponse::failed("삭제할 수 없습니다");
        assert_eq!(
            failed.into_ack("x"),
            Err(ApiError::backend(200, "삭제할 수 없습니다"))
        );
    }
}
