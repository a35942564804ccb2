// Storage layer: in-memory chain store for tests and integration harnesses
pub mod memory;

pub use memory::*;
