//! Storage helpers shared by the in-process repositories.

pub mod memory_table;

pub use memory_table::MemoryTable;
