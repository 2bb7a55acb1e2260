pub mod modules;
#[cfg(feature = "postgres")]
pub mod schema;
pub mod server;
pub mod shared;
