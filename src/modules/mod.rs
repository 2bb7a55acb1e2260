pub mod attribute;
pub mod category_attribute;
