pub mod attribute;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use attribute::{Attribute, AttributeDraft, AttributeState};
pub use repository::{AttributeListQuery, AttributeRepository, AttributeSortField};
pub use value_objects::{AttributeOption, AttributeType};
