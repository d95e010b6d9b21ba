use contracts::shared::api_response::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u501_hs_classification::session::TEMPLATE_FILE_NAME;
use contracts::usecases::u501_hs_classification::{UploadResult, TEMPLATE_PATH, UPLOAD_PATH};

use crate::shared::api_client;
use crate::shared::export::{download_bytes, XLSX_MIME};

/// Send the product sheet for classification.
pub async fn upload_file(file: &web_sys::File) -> Result<ApiResponse<UploadResult>, ApiError> {
    log::info!("u501: uploading '{}' ({} bytes)", file.name(), file.size());
    api_client::post_file::<UploadResult>(UPLOAD_PATH, file).await
}

/// Fetch the blank input template and save it as `hs_code_template.xlsx`.
pub async fn download_template() -> Result<(), ApiError> {
    let bytes = api_client::get_bytes(TEMPLATE_PATH).await?;
    download_bytes(&bytes, XLSX_MIME, TEMPLATE_FILE_NAME).map_err(|e| {
        log::error!("u501: template download failed: {}", e);
        ApiError::Network(e)
    })
}
