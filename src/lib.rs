//! Users API Library
//!
//! CRUD HTTP API for a user resource persisted in a flat JSON file.
//! Provides the domain model, the store and repository adapters, the user
//! service and the axum HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod service;
