pub mod account_service;
pub mod auth_service;
pub mod career_service;
pub mod category_service;
pub mod course_service;
pub mod course_structure_service;
pub mod forum_service;
pub mod http;
pub mod plan_service;
pub mod subscription_service;
pub mod upload_service;

pub use http::{ApiError, AuthApi, PublicApi};
