//! Record types for the creamery store and their SeaORM persistence
//! functions.

pub mod errors;
pub mod db;
pub mod ice_cream;
pub mod person;
