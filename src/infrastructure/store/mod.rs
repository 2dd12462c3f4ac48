// Store adapters (whole-collection persistence)

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
