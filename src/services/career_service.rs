use crate::models::{ApiResponse, CareerAnswers, CareerQuestion, NewCareerQuestion};
use crate::services::{ApiError, AuthApi};

pub async fn get_all_career_questions() -> Result<ApiResponse<Vec<CareerQuestion>>, ApiError> {
    AuthApi::get("/career-question").await
}

/// Batch create; the admin screen submits several rows at once.
pub async fn create_career_questions(
    questions: &[NewCareerQuestion],
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::post("/career-question", &questions).await
}

/// Server-side RIASEC scoring; the answer sheet goes up, a type code comes back.
pub async fn calculate_career_result(
    answers: &CareerAnswers,
) -> Result<ApiResponse<String>, ApiError> {
    AuthApi::post("/career-question/calculate", answers).await
}
