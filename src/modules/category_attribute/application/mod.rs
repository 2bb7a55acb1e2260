pub mod handlers;
pub mod use_cases;

pub use handlers::CategoryAttributeHandlers;
pub use use_cases::*;
