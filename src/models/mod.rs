pub mod account;
pub mod career;
pub mod category;
pub mod course;
pub mod forum;
pub mod plan;
pub mod response;

pub use account::{Account, AuthSession, LoginRequest, NewAccount, RegisterRequest, Role};
pub use career::{CareerAnswers, CareerQuestion, CareerType, NewCareerQuestion};
pub use category::{Category, CategoryPayload};
pub use course::{
    Chapter, Course, CourseContent, CoursePayload, CurLearningPath, LearningPath, Lesson,
    NewChapter, NewLearningPath, NewLesson, NewResource, ResourceItem,
};
pub use forum::{Comment, NewComment, NewPost, NewTopic, Post, Topic};
pub use plan::{Feature, Plan, PlanPayload, SubscriptionRequest};
pub use response::ApiResponse;
