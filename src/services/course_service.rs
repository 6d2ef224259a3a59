use crate::models::{ApiResponse, Course, CourseContent, CoursePayload};
use crate::services::{ApiError, AuthApi, PublicApi};

/// Full catalogue for the admin screens.
pub async fn get_all_courses() -> Result<ApiResponse<Vec<Course>>, ApiError> {
    AuthApi::get("/course").await
}

/// Published courses only (landing page).
pub async fn get_all_published_courses() -> Result<ApiResponse<Vec<Course>>, ApiError> {
    PublicApi::get("/course/public").await
}

/// Course with its full learning-path structure. Requires a session.
pub async fn get_course_by_id(id: u64) -> Result<ApiResponse<CourseContent>, ApiError> {
    AuthApi::get(&format!("/course/{}", id)).await
}

pub async fn get_courses_by_category_id(category_id: u64) -> Result<ApiResponse<Vec<Course>>, ApiError> {
    PublicApi::get(&format!("/course/public/category/{}", category_id)).await
}

pub async fn create_course(course: &CoursePayload) -> Result<ApiResponse<Course>, ApiError> {
    AuthApi::post("/course", course).await
}

pub async fn update_course(id: u64, course: &CoursePayload) -> Result<ApiResponse<Course>, ApiError> {
    AuthApi::put(&format!("/course/{}", id), course).await
}

pub async fn delete_course(id: u64) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::delete(&format!("/course/{}", id)).await
}
