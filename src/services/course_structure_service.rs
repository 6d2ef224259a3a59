//! Course-builder writes: learning paths, chapters, lessons and resources.

use crate::models::{
    ApiResponse, NewChapter, NewLearningPath, NewLesson, NewResource, ResourceItem,
};
use crate::services::{ApiError, AuthApi};

pub async fn create_learning_path(
    path: &NewLearningPath,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::post("/learning-path", path).await
}

pub async fn create_chapter(chapter: &NewChapter) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::post("/chapter", chapter).await
}

pub async fn create_lesson(lesson: &NewLesson) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    AuthApi::post("/lesson", lesson).await
}

pub async fn create_resource(resource: &NewResource) -> Result<ApiResponse<ResourceItem>, ApiError> {
    AuthApi::post("/resource", resource).await
}

pub async fn get_resource_by_id(id: u64) -> Result<ApiResponse<ResourceItem>, ApiError> {
    AuthApi::get(&format!("/resource/{}", id)).await
}
