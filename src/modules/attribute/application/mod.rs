pub mod handlers;
pub mod use_cases;

pub use handlers::AttributeHandlers;
pub use use_cases::*;
