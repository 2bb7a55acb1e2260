#![allow(dead_code)]

pub mod factories;
pub mod helpers;
#[cfg(feature = "postgres")]
pub mod test_db;
