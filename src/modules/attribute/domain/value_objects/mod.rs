pub mod attribute_option;
pub mod attribute_type;

pub use attribute_option::AttributeOption;
pub use attribute_type::AttributeType;
