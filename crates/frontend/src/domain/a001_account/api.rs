use contracts::domain::a001_account::{Account, AccountForm};
use contracts::shared::error::ApiError;

use crate::shared::api_client;

const ACCOUNTS_PATH: &str = "/api/v1/accounts/";

fn account_path(id: i64) -> String {
    format!("/api/v1/accounts/{}", id)
}

pub async fn fetch_accounts() -> Result<Vec<Account>, ApiError> {
    api_client::get::<Vec<Account>>(ACCOUNTS_PATH)
        .await?
        .into_result("")
}

pub async fn create_account(form: &AccountForm) -> Result<Account, ApiError> {
    log::info!("a001: creating account '{}'", form.code);
    api_client::post::<_, Account>(ACCOUNTS_PATH, form)
        .await?
        .into_result("")
}

pub async fn update_account(id: i64, form: &AccountForm) -> Result<Account, ApiError> {
    log::info!("a001: updating account {}", id);
    api_client::put::<_, Account>(&account_path(id), form)
        .await?
        .into_result("")
}

pub async fn delete_account(id: i64) -> Result<(), ApiError> {
    log::info!("a001: deleting account {}", id);
    api_client::delete(&account_path(id)).await?.into_ack("")
}
