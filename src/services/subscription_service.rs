use crate::models::{ApiResponse, SubscriptionRequest};
use crate::services::{ApiError, AuthApi};

pub async fn create_subscription(
    subscription: &SubscriptionRequest,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::post("/subscription", subscription).await
}
