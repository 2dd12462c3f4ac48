// Application services
// Orchestrate repository calls and own id/timestamp policy

pub mod user_service;

pub use user_service::UserService;
