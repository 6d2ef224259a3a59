use crate::models::{ApiResponse, AuthSession, LoginRequest, RegisterRequest};
use crate::services::{ApiError, PublicApi};

/// Đăng nhập
pub async fn login(request: &LoginRequest) -> Result<ApiResponse<AuthSession>, ApiError> {
    PublicApi::post("/auth/login", request).await
}

/// Đăng ký
pub async fn register(request: &RegisterRequest) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    PublicApi::post("/auth/register", request).await
}
