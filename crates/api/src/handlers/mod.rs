//! Request handlers, one module per resource.

pub mod categories;
pub mod tasks;
