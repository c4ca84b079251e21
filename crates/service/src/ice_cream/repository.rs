use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::storage::MemoryTable;
use models::ice_cream::{self, IceCream, IceCreamDraft};

/// Persistence primitives the catalog needs, nothing more.
#[async_trait]
pub trait IceCreamRepository: Send + Sync {
    /// Insert, or overwrite when the draft's id already exists.
    async fn save(&self, draft: IceCreamDraft) -> Result<IceCream, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<IceCream>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<IceCream>, ServiceError>;
    async fn find_all_by_dairy_free(&self, dairy_free: bool) -> Result<Vec<IceCream>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmIceCreamRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl IceCreamRepository for SeaOrmIceCreamRepository {
    async fn save(&self, draft: IceCreamDraft) -> Result<IceCream, ServiceError> {
        Ok(ice_cream::save(&self.db, draft).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<IceCream>, ServiceError> {
        Ok(ice_cream::find_by_id(&self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<IceCream>, ServiceError> {
        Ok(ice_cream::find_all(&self.db).await?)
    }

    async fn find_all_by_dairy_free(&self, dairy_free: bool) -> Result<Vec<IceCream>, ServiceError> {
        Ok(ice_cream::find_all_by_dairy_free(&self.db, dairy_free).await?)
    }
}

/// In-process repository; contents are lost on restart.
#[derive(Default)]
pub struct MemoryIceCreamRepository {
    table: MemoryTable<IceCream>,
}

impl MemoryIceCreamRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl IceCreamRepository for MemoryIceCreamRepository {
    async fn save(&self, draft: IceCreamDraft) -> Result<IceCream, ServiceError> {
        let id = draft.id;
        self.table.save(id, |id| draft.into_record(id)).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<IceCream>, ServiceError> {
        Ok(self.table.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<IceCream>, ServiceError> {
        Ok(self.table.list().await)
    }

    async fn find_all_by_dairy_free(&self, dairy_free: bool) -> Result<Vec<IceCream>, ServiceError> {
        Ok(self.table.list_where(|r| r.dairy_free == dairy_free).await)
    }
}
