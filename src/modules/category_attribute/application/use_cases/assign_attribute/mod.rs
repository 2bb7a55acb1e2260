mod command;
mod handler;

pub use command::AssignAttributeCommand;
pub use handler::AssignAttributeHandler;
