//! Domain types and pure utilities shared by the database and API crates.

pub mod datetime;
pub mod error;
pub mod types;
pub mod validation;
