pub mod admin_account;
pub mod admin_career_question;
pub mod admin_category;
pub mod admin_course;
pub mod admin_plan;
pub mod career_test;
pub mod course_builder;
pub mod dashboard;
pub mod forum;
pub mod home;
pub mod login;
pub mod register;
pub mod user_plans;

pub use career_test::CareerTestView;
pub use dashboard::DashboardView;
pub use forum::ForumView;
pub use home::HomeView;
pub use login::LoginView;
pub use register::RegisterView;
pub use user_plans::UserPlansView;
