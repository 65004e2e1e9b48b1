//! Domain model structs and wire DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` + `Deserialize` DTO carrying the wire representation
//! - `From` / `TryFrom` conversions between the two (validation lives in
//!   `TryFrom`, so malformed payloads never reach a repository)

pub mod category;
pub mod task;
