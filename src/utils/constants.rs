/// Base URL of the LearnMap backend REST API.
/// Resolved at compile time via build.rs:
/// - Development: http://localhost:8080/api/v1 (default)
/// - Production: set API_BASE_URL in .env or the environment
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api/v1",
};

// localStorage keys shared with the backend session contract.
// token and user are always written and cleared together.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_CURRENT_PAGE: &str = "currentPage";
pub const STORAGE_KEY_INTENDED_ROUTE: &str = "intendedRoute";
