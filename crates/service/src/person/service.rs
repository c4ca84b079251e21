use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::person::repository::PersonRepository;
use models::person::{Person, PersonDraft};

/// Registry operations over a person repository.
pub struct PersonService<R: PersonRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PersonRepository + ?Sized> PersonService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store the person as sent. No field is inspected.
    #[instrument(skip(self, draft))]
    pub async fn add_person(&self, draft: PersonDraft) -> Result<Person, ServiceError> {
        let saved = self.repo.save(draft).await?;
        info!(id = saved.id, "person_added");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::MemoryPersonRepository;
    use serde_json::json;

    #[tokio::test]
    async fn add_person_persists_fields_verbatim() -> Result<(), anyhow::Error> {
        let repo = Arc::new(MemoryPersonRepository::new());
        let svc = PersonService::new(Arc::clone(&repo));

        let draft: PersonDraft = serde_json::from_value(json!({"firstName": "Ada", "tags": ["a", "b"]}))?;
        let saved = svc.add_person(draft).await?;
        assert_eq!(saved.id, 1);

        let stored = repo.get(saved.id).await.expect("stored");
        assert_eq!(stored.attributes, json!({"firstName": "Ada", "tags": ["a", "b"]}));
        Ok(())
    }

    #[tokio::test]
    async fn add_person_accepts_empty_body() -> Result<(), anyhow::Error> {
        let svc = PersonService::new(Arc::new(MemoryPersonRepository::new()));
        let first = svc.add_person(PersonDraft::default()).await?;
        let second = svc.add_person(PersonDraft::default()).await?;
        assert_ne!(first.id, second.id);
        Ok(())
    }
}
