pub mod assign_attribute;
pub mod list_category_attributes;
pub mod unassign_attribute;
pub mod update_category_attribute;

pub use assign_attribute::{AssignAttributeCommand, AssignAttributeHandler};
pub use list_category_attributes::{
    ListCategoryAttributesHandler, ListCategoryAttributesQuery, ListCategoryAttributesResult,
};
pub use unassign_attribute::{UnassignAttributeCommand, UnassignAttributeHandler};
pub use update_category_attribute::{
    UpdateCategoryAttributeCommand, UpdateCategoryAttributeHandler,
};
