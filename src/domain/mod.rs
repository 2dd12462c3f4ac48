// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod repositories;
pub mod store;
pub mod user;
