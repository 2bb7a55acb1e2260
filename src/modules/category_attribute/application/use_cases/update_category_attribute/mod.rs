mod command;
mod handler;

pub use command::UpdateCategoryAttributeCommand;
pub use handler::UpdateCategoryAttributeHandler;
