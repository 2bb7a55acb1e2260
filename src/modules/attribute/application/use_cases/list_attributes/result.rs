use crate::modules::attribute::domain::Attribute;
use crate::shared::application::PaginatedResult;

/// One page of attributes plus the total match count
pub type ListAttributesResult = PaginatedResult<Attribute>;
