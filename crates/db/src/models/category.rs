//! Task category model and wire DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktrack_core::error::CoreError;
use tasktrack_core::types::DbId;
use tasktrack_core::validation::{check_max_len, require, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `task_categories` table.
///
/// `category_id` is `None` only for instances built from a create payload;
/// every persisted row carries an id.
#[derive(Debug, Clone, FromRow)]
pub struct TaskCategory {
    pub category_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (wire representation)
// ---------------------------------------------------------------------------

/// Wire representation of a category.
///
/// Every field is optional on input so that missing fields surface as
/// validation errors from `TryFrom` rather than deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCategoryDto {
    pub category_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<TaskCategory> for TaskCategoryDto {
    fn from(category: TaskCategory) -> Self {
        Self {
            category_id: category.category_id,
            name: Some(category.name),
            description: category.description,
        }
    }
}

impl TryFrom<TaskCategoryDto> for TaskCategory {
    type Error = CoreError;

    fn try_from(dto: TaskCategoryDto) -> Result<Self, Self::Error> {
        let name = require("name", dto.name)?;
        check_max_len("name", &name, MAX_NAME_LEN)?;
        if let Some(description) = &dto.description {
            check_max_len("description", description, MAX_DESCRIPTION_LEN)?;
        }
        Ok(Self {
            category_id: dto.category_id,
            name,
            description: dto.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn entity_round_trips_through_dto() {
        let entity = TaskCategory {
            category_id: Some(7),
            name: "Errands".to_string(),
            description: Some("Things to run".to_string()),
        };
        let dto = TaskCategoryDto::from(entity);
        let back = TaskCategory::try_from(dto).unwrap();
        assert_eq!(back.category_id, Some(7));
        assert_eq!(back.name, "Errands");
        assert_eq!(back.description.as_deref(), Some("Things to run"));
    }

    #[test]
    fn missing_name_fails_validation() {
        let dto = TaskCategoryDto {
            category_id: None,
            name: None,
            description: Some("no name".to_string()),
        };
        assert_matches!(TaskCategory::try_from(dto), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_over_limit_fails_validation() {
        let dto = TaskCategoryDto {
            category_id: None,
            name: Some("x".repeat(MAX_NAME_LEN + 1)),
            description: None,
        };
        assert_matches!(TaskCategory::try_from(dto), Err(CoreError::Validation(_)));
    }

    #[test]
    fn description_over_limit_fails_validation() {
        let dto = TaskCategoryDto {
            category_id: None,
            name: Some("ok".to_string()),
            description: Some("x".repeat(MAX_DESCRIPTION_LEN + 1)),
        };
        assert_matches!(TaskCategory::try_from(dto), Err(CoreError::Validation(_)));
    }

    #[test]
    fn dto_serializes_with_camel_case_id() {
        let dto = TaskCategoryDto {
            category_id: Some(1),
            name: Some("Work".to_string()),
            description: None,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({ "categoryId": 1, "name": "Work", "description": null })
        );
    }

    #[test]
    fn dto_deserializes_with_all_fields_absent() {
        let dto: TaskCategoryDto = serde_json::from_str("{}").unwrap();
        assert!(dto.category_id.is_none());
        assert!(dto.name.is_none());
        assert!(dto.description.is_none());
    }
}
