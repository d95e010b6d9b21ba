use contracts::shared::error::ApiError;
use contracts::system::auth::{
    ValidateCodeRequest, ValidateCodeResponse, INVALID_CODE_MESSAGE, VALIDATE_PATH,
};

use crate::shared::api_client;

/// Exchange an access code for a session token.
pub async fn validate_code(code: &str) -> Result<ValidateCodeResponse, ApiError> {
    let request = ValidateCodeRequest {
        code: code.trim().to_string(),
    };
    api_client::post::<_, ValidateCodeResponse>(VALIDATE_PATH, &request)
        .await?
        .into_result(INVALID_CODE_MESSAGE)
}
