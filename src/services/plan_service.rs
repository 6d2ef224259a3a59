use crate::models::{ApiResponse, Feature, Plan, PlanPayload};
use crate::services::{ApiError, AuthApi, PublicApi};

pub async fn get_all_public_plans() -> Result<ApiResponse<Vec<Plan>>, ApiError> {
    PublicApi::get("/plan/public").await
}

pub async fn get_all_plans() -> Result<ApiResponse<Vec<Plan>>, ApiError> {
    AuthApi::get("/plan").await
}

pub async fn create_plan(plan: &PlanPayload) -> Result<ApiResponse<Plan>, ApiError> {
    AuthApi::post("/plan", plan).await
}

pub async fn update_plan(id: u64, plan: &PlanPayload) -> Result<ApiResponse<Plan>, ApiError> {
    AuthApi::put(&format!("/plan/{}", id), plan).await
}

/// Catalogue of assignable plan features.
pub async fn get_all_features() -> Result<ApiResponse<Vec<Feature>>, ApiError> {
    AuthApi::get("/feature").await
}
