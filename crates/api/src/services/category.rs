//! Category service: validation, persistence, and error translation.

use tasktrack_core::error::CoreError;
use tasktrack_core::types::DbId;
use tasktrack_db::models::category::{TaskCategory, TaskCategoryDto};
use tasktrack_db::repositories::TaskCategoryRepo;
use tasktrack_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::services::map_save_error;

/// Operations on task categories, shared by every category endpoint.
pub struct CategoryService;

impl CategoryService {
    /// List all categories, ordered by id.
    pub async fn list(pool: &DbPool) -> AppResult<Vec<TaskCategoryDto>> {
        let categories = TaskCategoryRepo::find_all(pool).await?;
        Ok(categories.into_iter().map(TaskCategoryDto::from).collect())
    }

    /// Fetch one category by id. Absence is `None`, not an error; the
    /// handler decides what an absent category means for its request.
    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Option<TaskCategoryDto>> {
        let category = TaskCategoryRepo::find_by_id(pool, id).await?;
        Ok(category.map(TaskCategoryDto::from))
    }

    /// Validate and persist a category payload, returning the stored state.
    pub async fn save(pool: &DbPool, dto: TaskCategoryDto) -> AppResult<TaskCategoryDto> {
        let category = TaskCategory::try_from(dto)?;
        let saved = TaskCategoryRepo::save(pool, &category)
            .await
            .map_err(map_save_error)?;
        Ok(TaskCategoryDto::from(saved))
    }

    /// Delete a category by id.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
        let deleted = TaskCategoryRepo::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "TaskCategory",
                id,
            }));
        }
        Ok(())
    }
}
