//! Storage for the resource collections

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryStore;
pub use seed::SeedData;
