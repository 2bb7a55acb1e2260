mod handler;
mod query;

pub use handler::GetAttributeHandler;
pub use query::GetAttributeQuery;
