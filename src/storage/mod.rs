//! Storage implementations for the library

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryLibrary;
pub use seed::Seed;
