// Request guards

pub mod auth;

pub use auth::TokenAuth;
