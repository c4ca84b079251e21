//! Service layer providing the catalog and registry operations on top of
//! record repositories.
//! - Services own an `Arc` to a repository handed in at construction.
//! - Repositories come in a SeaORM flavour and an in-process flavour.
//! - Lookups by id report absence as `ServiceError::NotFound`.

pub mod errors;
pub mod storage;
pub mod ice_cream;
pub mod person;
