//! Shared type aliases used across the workspace.

/// Database row identifier. SQLite `INTEGER PRIMARY KEY` columns are
/// 64-bit, so every entity id in the system is an `i64`.
pub type DbId = i64;

/// Timestamp without a timezone, as exchanged on the wire and stored in
/// the database.
pub type LocalTimestamp = chrono::NaiveDateTime;
