//! Task model, its category reference, and wire DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktrack_core::datetime::{format_local_date_time, parse_local_date_time};
use tasktrack_core::error::CoreError;
use tasktrack_core::types::{DbId, LocalTimestamp};
use tasktrack_core::validation::{check_max_len, require, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

use crate::models::category::TaskCategory;
use crate::repositories::TaskCategoryRepo;
use crate::DbPool;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// Reference to the category a task belongs to.
///
/// Holds only the foreign key; the full [`TaskCategory`] row is loaded on
/// demand through [`CategoryRef::resolve`].
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CategoryRef {
    pub category_id: DbId,
}

impl CategoryRef {
    /// Load the referenced category row.
    pub async fn resolve(&self, pool: &DbPool) -> Result<Option<TaskCategory>, sqlx::Error> {
        TaskCategoryRepo::find_by_id(pool, self.category_id).await
    }
}

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: Option<DbId>,
    #[sqlx(flatten)]
    pub category: CategoryRef,
    pub name: String,
    pub description: Option<String>,
    pub deadline: LocalTimestamp,
}

// ---------------------------------------------------------------------------
// DTOs (wire representation)
// ---------------------------------------------------------------------------

/// Wire representation of a task.
///
/// The category appears as a bare `categoryId` and the deadline as an
/// ISO-8601 local timestamp string. As with the category DTO, every field
/// is optional on input and required fields are enforced in `TryFrom`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            category_id: Some(task.category.category_id),
            name: Some(task.name),
            description: task.description,
            deadline: Some(format_local_date_time(task.deadline)),
        }
    }
}

impl TryFrom<TaskDto> for Task {
    type Error = CoreError;

    fn try_from(dto: TaskDto) -> Result<Self, Self::Error> {
        let name = require("name", dto.name)?;
        check_max_len("name", &name, MAX_NAME_LEN)?;
        if let Some(description) = &dto.description {
            check_max_len("description", description, MAX_DESCRIPTION_LEN)?;
        }
        let category_id = require("categoryId", dto.category_id)?;
        let deadline = require("deadline", dto.deadline)?;
        let deadline = parse_local_date_time(&deadline)?;
        Ok(Self {
            id: dto.id,
            category: CategoryRef { category_id },
            name,
            description: dto.description,
            deadline,
        })
    }
}
