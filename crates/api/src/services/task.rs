//! Task service: validation, persistence, and error translation.

use tasktrack_core::error::CoreError;
use tasktrack_core::types::DbId;
use tasktrack_db::models::task::{Task, TaskDto};
use tasktrack_db::repositories::TaskRepo;
use tasktrack_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::services::map_save_error;

/// Operations on tasks, shared by every task endpoint.
pub struct TaskService;

impl TaskService {
    /// List all tasks, ordered by id.
    pub async fn list(pool: &DbPool) -> AppResult<Vec<TaskDto>> {
        let tasks = TaskRepo::find_all(pool).await?;
        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    /// Fetch one task by id. Absence is `None`, not an error; the handler
    /// decides what an absent task means for its request.
    pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Option<TaskDto>> {
        let task = TaskRepo::find_by_id(pool, id).await?;
        Ok(task.map(TaskDto::from))
    }

    /// Validate and persist a task payload, returning the stored state.
    pub async fn save(pool: &DbPool, dto: TaskDto) -> AppResult<TaskDto> {
        let task = Task::try_from(dto)?;
        let saved = TaskRepo::save(pool, &task).await.map_err(map_save_error)?;
        Ok(TaskDto::from(saved))
    }

    /// Delete a task by id.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
        let deleted = TaskRepo::delete(pool, id).await?;
        if !deleted {
            return Err(AppError::Core(CoreError::NotFound { entity: "Task", id }));
        }
        Ok(())
    }
}
