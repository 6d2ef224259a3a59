pub mod use_auth;

pub use use_auth::{use_app_events, use_auth, SessionHandle, SessionProvider};
