mod command;
mod handler;

pub use command::UpdateAttributeCommand;
pub use handler::UpdateAttributeHandler;
