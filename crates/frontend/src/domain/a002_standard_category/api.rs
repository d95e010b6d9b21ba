use contracts::domain::a002_standard_category::{StandardCategory, StandardCategoryUpdate};
use contracts::shared::error::ApiError;

use crate::shared::api_client;

const CATEGORIES_PATH: &str = "/api/v1/categories/";

pub async fn fetch_categories() -> Result<Vec<StandardCategory>, ApiError> {
    api_client::get::<Vec<StandardCategory>>(CATEGORIES_PATH)
        .await?
        .into_result("")
}

pub async fn update_category(
    id: i64,
    update: &StandardCategoryUpdate,
) -> Result<StandardCategory, ApiError> {
    log::info!("a002: updating category {}", id);
    api_client::put::<_, StandardCategory>(&format!("/api/v1/categories/{}", id), update)
        .await?
        .into_result("")
}
