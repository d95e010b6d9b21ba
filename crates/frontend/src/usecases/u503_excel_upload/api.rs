use contracts::shared::error::ApiError;
use contracts::usecases::u503_excel_upload::UPLOAD_PATH;
use serde_json::Value;

use crate::shared::api_client;

/// Send the file as picked; grid edits stay in the browser.
pub async fn upload(file: &web_sys::File) -> Result<(), ApiError> {
    log::info!("u503: uploading '{}'", file.name());
    api_client::post_file::<Value>(UPLOAD_PATH, file)
        .await?
        .into_ack("")
}
