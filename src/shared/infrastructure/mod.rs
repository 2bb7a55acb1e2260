#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "postgres")]
pub use database::{violated_unique_constraint, Database, DbConnection, DbPool};
