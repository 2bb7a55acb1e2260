use crate::modules::category_attribute::domain::CategoryAttribute;
use crate::shared::application::PaginatedResult;

pub type ListCategoryAttributesResult = PaginatedResult<CategoryAttribute>;
