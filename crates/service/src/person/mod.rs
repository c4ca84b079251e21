pub mod repository;
pub mod service;

pub use models::person::{Person, PersonDraft};
pub use repository::{MemoryPersonRepository, PersonRepository, SeaOrmPersonRepository};
pub use service::PersonService;
