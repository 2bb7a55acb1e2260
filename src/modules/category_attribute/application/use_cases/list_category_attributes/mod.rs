mod handler;
mod query;
mod result;

pub use handler::ListCategoryAttributesHandler;
pub use query::ListCategoryAttributesQuery;
pub use result::ListCategoryAttributesResult;
