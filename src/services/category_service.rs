use crate::models::{ApiResponse, Category, CategoryPayload};
use crate::services::{ApiError, AuthApi, PublicApi};

/// Public listing used by both the home page and the admin screens.
pub async fn get_all_categories_public() -> Result<ApiResponse<Vec<Category>>, ApiError> {
    PublicApi::get("/category/public").await
}

pub async fn create_category(category: &CategoryPayload) -> Result<ApiResponse<Category>, ApiError> {
    AuthApi::post("/category", category).await
}

pub async fn update_category(
    id: u64,
    category: &CategoryPayload,
) -> Result<ApiResponse<Category>, ApiError> {
    AuthApi::put(&format!("/category/{}", id), category).await
}

pub async fn delete_category(id: u64) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::delete(&format!("/category/{}", id)).await
}
