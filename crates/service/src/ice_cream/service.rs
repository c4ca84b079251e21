use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::ice_cream::repository::IceCreamRepository;
use models::ice_cream::{IceCream, IceCreamDraft};

/// Catalog operations over an ice cream repository.
///
/// Absence of an id is reported as [`ServiceError::NotFound`]; every other
/// error comes from the repository.
pub struct IceCreamService<R: IceCreamRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: IceCreamRepository + ?Sized> IceCreamService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new record and return it with its assigned id.
    #[instrument(skip(self, draft))]
    pub async fn create_new_ice_cream(&self, draft: IceCreamDraft) -> Result<IceCream, ServiceError> {
        let saved = self.repo.save(draft).await?;
        info!(id = saved.id, "ice_cream_created");
        Ok(saved)
    }

    pub async fn get_ice_cream_by_id(&self, id: i32) -> Result<IceCream, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ice_cream", id))
    }

    /// Replace every field of an existing record. Never creates one.
    #[instrument(skip(self, draft))]
    pub async fn update_ice_cream_by_id(&self, id: i32, draft: IceCreamDraft) -> Result<IceCream, ServiceError> {
        let existing = self.get_ice_cream_by_id(id).await?;
        let updated = self.repo.save(draft.with_id(existing.id)).await?;
        info!(id = updated.id, "ice_cream_updated");
        Ok(updated)
    }

    pub async fn get_all_ice_cream(&self) -> Result<Vec<IceCream>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_all_ice_cream_by_dairy_free(&self, dairy_free: bool) -> Result<Vec<IceCream>, ServiceError> {
        let rows = self.repo.find_all_by_dairy_free(dairy_free).await?;
        debug!(dairy_free, count = rows.len(), "ice_cream_filtered");
        Ok(rows)
    }
}
