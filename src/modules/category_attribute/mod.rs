pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CategoryAttributeHandlers;
pub use domain::{CategoryAttribute, CategoryAttributeRepository};
pub use infrastructure::InMemoryCategoryAttributeRepository;
#[cfg(feature = "postgres")]
pub use infrastructure::PostgresCategoryAttributeRepository;
