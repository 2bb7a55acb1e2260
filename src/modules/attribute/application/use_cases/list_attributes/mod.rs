mod handler;
mod query;
mod result;

pub use handler::ListAttributesHandler;
pub use query::ListAttributesQuery;
pub use result::ListAttributesResult;
