//! Repository for the `tasks` table.

use tasktrack_core::types::DbId;

use crate::models::task::Task;
use crate::DbPool;

/// Column list for `tasks` queries.
const COLUMNS: &str = "id, category_id, name, description, deadline";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// List all tasks, ordered by id.
    pub async fn find_all(pool: &DbPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Find a task by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the tasks belonging to one category, ordered by id.
    pub async fn find_by_category(pool: &DbPool, category_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE category_id = ?1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Insert or fully replace a task, returning the stored row.
    ///
    /// Mirrors [`TaskCategoryRepo::save`]: an id makes the write an upsert,
    /// no id lets the database assign the next unused one.
    ///
    /// [`TaskCategoryRepo::save`]: crate::repositories::TaskCategoryRepo::save
    pub async fn save(pool: &DbPool, task: &Task) -> Result<Task, sqlx::Error> {
        match task.id {
            Some(id) => {
                let query = format!(
                    "INSERT INTO tasks (id, category_id, name, description, deadline) \
                     VALUES (?1, ?2, ?3, ?4, ?5) \
                     ON CONFLICT (id) DO UPDATE SET \
                         category_id = excluded.category_id, \
                         name = excluded.name, \
                         description = excluded.description, \
                         deadline = excluded.deadline \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(id)
                    .bind(task.category.category_id)
                    .bind(&task.name)
                    .bind(&task.description)
                    .bind(task.deadline)
                    .fetch_one(pool)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO tasks (category_id, name, description, deadline) \
                     VALUES (?1, ?2, ?3, ?4) \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(task.category.category_id)
                    .bind(&task.name)
                    .bind(&task.description)
                    .bind(task.deadline)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Delete a task by id. Returns `false` if no row matched.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
