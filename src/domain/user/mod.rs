// User domain module
// Contains the user entity, its update payloads and value objects

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

// Re-export main types for convenience
pub use user::{User, UserFields, UserPatch};
pub use value_objects::Email;
