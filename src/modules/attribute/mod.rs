pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::AttributeHandlers;
pub use domain::{Attribute, AttributeRepository};
pub use infrastructure::InMemoryAttributeRepository;
#[cfg(feature = "postgres")]
pub use infrastructure::PostgresAttributeRepository;
