//! Repository for the `task_categories` table.

use tasktrack_core::types::DbId;

use crate::models::category::TaskCategory;
use crate::DbPool;

/// Column list for `task_categories` queries.
const COLUMNS: &str = "category_id, name, description";

/// Provides CRUD operations for task categories.
pub struct TaskCategoryRepo;

impl TaskCategoryRepo {
    /// List all categories, ordered by id.
    pub async fn find_all(pool: &DbPool) -> Result<Vec<TaskCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_categories ORDER BY category_id");
        sqlx::query_as::<_, TaskCategory>(&query).fetch_all(pool).await
    }

    /// Find a category by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<TaskCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_categories WHERE category_id = ?1");
        sqlx::query_as::<_, TaskCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace a category, returning the stored row.
    ///
    /// With an id the write is an upsert: an existing row is replaced
    /// column for column, a missing row is inserted under that id. Without
    /// an id the database assigns the next unused one.
    pub async fn save(pool: &DbPool, category: &TaskCategory) -> Result<TaskCategory, sqlx::Error> {
        match category.category_id {
            Some(id) => {
                let query = format!(
                    "INSERT INTO task_categories (category_id, name, description) \
                     VALUES (?1, ?2, ?3) \
                     ON CONFLICT (category_id) DO UPDATE SET \
                         name = excluded.name, \
                         description = excluded.description \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, TaskCategory>(&query)
                    .bind(id)
                    .bind(&category.name)
                    .bind(&category.description)
                    .fetch_one(pool)
                    .await
            }
            None => {
                let query = format!(
                    "INSERT INTO task_categories (name, description) \
                     VALUES (?1, ?2) \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, TaskCategory>(&query)
                    .bind(&category.name)
                    .bind(&category.description)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// Delete a category by id. Returns `false` if no row matched.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task_categories WHERE category_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
