//! Storage backends implementing the basalt cache contract.

pub mod memory;
pub mod sled_store;

pub use memory::MemoryStore;
pub use sled_store::SledStore;
