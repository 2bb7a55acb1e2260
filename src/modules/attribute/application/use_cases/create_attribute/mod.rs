mod command;
mod handler;

pub use command::CreateAttributeCommand;
pub use handler::CreateAttributeHandler;
