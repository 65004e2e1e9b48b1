//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod category_repo;
pub mod task_repo;

pub use category_repo::TaskCategoryRepo;
pub use task_repo::TaskRepo;
