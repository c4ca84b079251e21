//! Shared building blocks for the creamery crates: log initialisation and
//! small wire types that do not belong to a single resource.

pub mod types;
pub mod utils;
