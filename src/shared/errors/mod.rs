pub mod api_error;
pub mod app_error;

pub use api_error::ProblemDetails;
pub use app_error::{AppError, AppResult};
