// ============================================================================
// LEARNMAP WEB - SPA front-end for the LearnMap learning platform
// ============================================================================
// Thin presentation layer over the LearnMap REST API:
// - services: two HTTP clients (public / bearer) + one module per resource
// - stores:   session state machine over an injectable storage port
// - events:   typed in-process broadcast bus (session-expired / login / error)
// - views:    one component per page; components/: shared widgets
// ============================================================================

pub mod app;
pub mod components;
pub mod events;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;
