use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::ice_cream::{IceCreamRepository, IceCreamService, MemoryIceCreamRepository, SeaOrmIceCreamRepository};
use service::person::{MemoryPersonRepository, PersonRepository, PersonService, SeaOrmPersonRepository};

/// Shared handler state: one service per resource, each over its own repository.
#[derive(Clone)]
pub struct AppState {
    pub ice_creams: Arc<IceCreamService<dyn IceCreamRepository>>,
    pub persons: Arc<PersonService<dyn PersonRepository>>,
}

impl AppState {
    pub fn new(ice_cream_repo: Arc<dyn IceCreamRepository>, person_repo: Arc<dyn PersonRepository>) -> Self {
        Self {
            ice_creams: Arc::new(IceCreamService::new(ice_cream_repo)),
            persons: Arc::new(PersonService::new(person_repo)),
        }
    }

    /// Both resources kept in process memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryIceCreamRepository::new()), Arc::new(MemoryPersonRepository::new()))
    }

    /// Both resources stored through SeaORM on the given pool.
    pub fn postgres(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmIceCreamRepository { db: db.clone() }),
            Arc::new(SeaOrmPersonRepository { db }),
        )
    }
}
