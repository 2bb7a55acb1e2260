pub mod category_attribute;
pub mod repository;

// Re-exports for easy access
pub use category_attribute::{
    CategoryAttribute, CategoryAttributeChanges, CategoryAttributeDraft, CategoryAttributeState,
};
pub use repository::{
    CategoryAttributeListQuery, CategoryAttributeRepository, CategoryAttributeSortField,
};
