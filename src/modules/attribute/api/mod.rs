pub mod dto;
pub mod routes;

pub use routes::routes;
