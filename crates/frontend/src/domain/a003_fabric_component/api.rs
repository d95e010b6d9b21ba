use contracts::domain::a003_fabric_component::{
    CategoryInfo, FabricComponent, FabricComponentForm, FabricQuery, MinorCategoryQuery,
};
use contracts::shared::error::ApiError;

use crate::shared::api_client;

const COMPONENTS_PATH: &str = "/api/v1/fabric-components/";
const MAJOR_CATEGORIES_PATH: &str = "/api/v1/fabric-components/major-categories";
const MINOR_CATEGORIES_PATH: &str = "/api/v1/fabric-components/minor-categories";

fn component_path(id: i64) -> String {
    format!("/api/v1/fabric-components/{}", id)
}

pub async fn fetch_components(query: &FabricQuery) -> Result<Vec<FabricComponent>, ApiError> {
    api_client::get_with_query::<_, Vec<FabricComponent>>(COMPONENTS_PATH, query)
        .await?
        .into_result("")
}

pub async fn fetch_component(id: i64) -> Result<FabricComponent, ApiError> {
    api_client::get::<FabricComponent>(&component_path(id))
        .await?
        .into_result("")
}

pub async fn fetch_major_categories() -> Result<Vec<CategoryInfo>, ApiError> {
    api_client::get::<Vec<CategoryInfo>>(MAJOR_CATEGORIES_PATH)
        .await?
        .into_result("")
}

pub async fn fetch_minor_categories(major_code: &str) -> Result<Vec<CategoryInfo>, ApiError> {
    let query = MinorCategoryQuery::for_major(major_code);
    api_client::get_with_query::<_, Vec<CategoryInfo>>(MINOR_CATEGORIES_PATH, &query)
        .await?
        .into_result("")
}

pub async fn create_component(form: &FabricComponentForm) -> Result<FabricComponent, ApiError> {
    log::info!("a003: creating component '{}'", form.component_name_en);
    api_client::post::<_, FabricComponent>(COMPONENTS_PATH, form)
        .await?
        .into_result("")
}

pub async fn update_component(
    id: i64,
    form: &FabricComponentForm,
) -> Result<FabricComponent, ApiError> {
    log::info!("a003: updating component {}", id);
    api_client::put::<_, FabricComponent>(&component_path(id), form)
        .await?
        .into_result("")
}

pub async fn delete_component(id: i64) -> Result<(), ApiError> {
    log::info!("a003: deleting component {}", id);
    api_client::delete(&component_path(id)).await?.into_ack("")
}
