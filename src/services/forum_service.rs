//! Forum: topics, posts and comments. Reads are public, writes need a session.

use crate::models::{ApiResponse, Comment, NewComment, NewPost, NewTopic, Post, Topic};
use crate::services::{ApiError, AuthApi, PublicApi};

pub async fn get_all_topics() -> Result<ApiResponse<Vec<Topic>>, ApiError> {
    PublicApi::get("/topic/public").await
}

pub async fn create_topic(topic: &NewTopic) -> Result<ApiResponse<Topic>, ApiError> {
    AuthApi::post("/topic", topic).await
}

pub async fn get_posts_by_topic_id(topic_id: u64) -> Result<ApiResponse<Vec<Post>>, ApiError> {
    PublicApi::get(&format!("/post/public/{}", topic_id)).await
}

pub async fn create_post(post: &NewPost) -> Result<ApiResponse<Post>, ApiError> {
    AuthApi::post("/post", post).await
}

pub async fn get_comments_by_post_id(post_id: u64) -> Result<ApiResponse<Vec<Comment>>, ApiError> {
    PublicApi::get(&format!("/comment/public/{}", post_id)).await
}

pub async fn create_comment(comment: &NewComment) -> Result<ApiResponse<Comment>, ApiError> {
    AuthApi::post("/comment", comment).await
}
