use crate::repositories::row_decode;
use crate::{DbError, Result as DbErrorResult};

use kb_core::TagCategory;

use uuid::Uuid;

const TABLE: &str = "tag_categories";

#[derive(sqlx::FromRow)]
struct TagCategoryRow {
    id: String,
    project_id: String,
    name: String,
    color: Option<String>,
    position: i64,
}

impl TryFrom<TagCategoryRow> for TagCategory {
    type Error = DbError;

    fn try_from(row: TagCategoryRow) -> DbErrorResult<Self> {
        Ok(TagCategory {
            id: row_decode::uuid(TABLE, "id", &row.id)?,
            project_id: row_decode::uuid(TABLE, "project_id", &row.project_id)?,
            name: row.name,
            color: row.color,
            position: row.position,
        })
    }
}

pub struct TagCategoryRepository;

impl TagCategoryRepository {
    pub async fn create<'e, E>(executor: E, category: &TagCategory) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            "INSERT INTO tag_categories (id, project_id, name, color, position) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(category.id.to_string())
        .bind(category.project_id.to_string())
        .bind(&category.name)
        .bind(&category.color)
        .bind(category.position)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<TagCategory>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, TagCategoryRow>(
            "SELECT id, project_id, name, color, position FROM tag_categories WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?
        .map(TagCategory::try_from)
        .transpose()
    }

    /// Categories of a project in display order
    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<TagCategory>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, TagCategoryRow>(
            r#"
                SELECT id, project_id, name, color, position
                FROM tag_categories
                WHERE project_id = ?
                ORDER BY position ASC, name ASC
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?
        .into_iter()
        .map(TagCategory::try_from)
        .collect()
    }
}
