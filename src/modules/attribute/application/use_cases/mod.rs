pub mod create_attribute;
pub mod get_attribute;
pub mod list_attributes;
pub mod update_attribute;

pub use create_attribute::{CreateAttributeCommand, CreateAttributeHandler};
pub use get_attribute::{GetAttributeHandler, GetAttributeQuery};
pub use list_attributes::{ListAttributesHandler, ListAttributesQuery, ListAttributesResult};
pub use update_attribute::{UpdateAttributeCommand, UpdateAttributeHandler};
