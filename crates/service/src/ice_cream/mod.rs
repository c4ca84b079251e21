pub mod repository;
pub mod service;

pub use models::ice_cream::{IceCream, IceCreamDraft};
pub use repository::{IceCreamRepository, MemoryIceCreamRepository, SeaOrmIceCreamRepository};
pub use service::IceCreamService;
