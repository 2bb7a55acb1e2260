pub mod in_memory_repository;
pub mod mapper;
#[cfg(feature = "postgres")]
pub mod postgres_repository;
pub mod record;

pub use in_memory_repository::InMemoryAttributeRepository;
#[cfg(feature = "postgres")]
pub use postgres_repository::PostgresAttributeRepository;
pub use record::AttributeRecord;
