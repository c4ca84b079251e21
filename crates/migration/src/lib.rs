//! Migrator creating the two record tables. Order does not matter; the
//! tables are independent.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_ice_cream;
mod m20240101_000002_create_person;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_ice_cream::Migration),
            Box::new(m20240101_000002_create_person::Migration),
        ]
    }
}
