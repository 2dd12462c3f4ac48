// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod store_user_repository;

pub use store_user_repository::StoreUserRepository;
