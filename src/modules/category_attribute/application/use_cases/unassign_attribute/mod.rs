mod command;
mod handler;

pub use command::UnassignAttributeCommand;
pub use handler::UnassignAttributeHandler;
