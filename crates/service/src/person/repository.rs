use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::storage::MemoryTable;
use models::person::{self, Person, PersonDraft};

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn save(&self, draft: PersonDraft) -> Result<Person, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPersonRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PersonRepository for SeaOrmPersonRepository {
    async fn save(&self, draft: PersonDraft) -> Result<Person, ServiceError> {
        Ok(person::save(&self.db, draft).await?)
    }
}

#[derive(Default)]
pub struct MemoryPersonRepository {
    table: MemoryTable<Person>,
}

impl MemoryPersonRepository {
    pub fn new() -> Self { Self::default() }

    #[cfg(test)]
    pub async fn get(&self, id: i32) -> Option<Person> {
        self.table.get(id).await
    }
}

#[async_trait]
impl PersonRepository for MemoryPersonRepository {
    async fn save(&self, draft: PersonDraft) -> Result<Person, ServiceError> {
        let id = draft.id;
        self.table.save(id, |id| draft.into_record(id)).await
    }
}
