pub mod ports;
pub mod value_objects;

pub use ports::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use value_objects::OverrideFlag;
