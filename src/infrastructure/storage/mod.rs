//! Storage backends for the lot's repositories.

pub mod memory;

pub use memory::InMemoryStorage;
