use crate::models::{Account, ApiResponse, NewAccount};
use crate::services::{ApiError, AuthApi};

pub async fn get_all_accounts() -> Result<ApiResponse<Vec<Account>>, ApiError> {
    AuthApi::get("/account").await
}

pub async fn create_account(account: &NewAccount) -> Result<ApiResponse<Account>, ApiError> {
    AuthApi::post("/account", account).await
}

pub async fn update_account(id: u64, account: &NewAccount) -> Result<ApiResponse<Account>, ApiError> {
    AuthApi::put(&format!("/account/{}", id), account).await
}

pub async fn delete_account(id: u64) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::delete(&format!("/account/{}", id)).await
}
