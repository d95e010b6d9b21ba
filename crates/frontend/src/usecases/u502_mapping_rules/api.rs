use contracts::shared::api_response::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::usecases::u502_mapping_rules::{MappingRule, MAP_PATH};

use crate::shared::api_client;

/// Ask the backend to fill in `hsCode` for every rule.
pub async fn map_rules(rules: &[MappingRule]) -> Result<ApiResponse<Vec<MappingRule>>, ApiError> {
    log::info!("u502: mapping {} rules", rules.len());
    api_client::post(MAP_PATH, &rules).await
}
