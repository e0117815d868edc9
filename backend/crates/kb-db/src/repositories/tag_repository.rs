use crate::repositories::row_decode;
use crate::{DbError, Result as DbErrorResult};

use kb_core::Tag;

use std::collections::BTreeMap;

use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

const TABLE: &str = "tags";

#[derive(sqlx::FromRow)]
struct TagRow {
    id: String,
    project_id: String,
    category_id: String,
    name: String,
    color: Option<String>,
    created_at: i64,
}

impl TryFrom<TagRow> for Tag {
    type Error = DbError;

    fn try_from(row: TagRow) -> DbErrorResult<Self> {
        Ok(Tag {
            id: row_decode::uuid(TABLE, "id", &row.id)?,
            project_id: row_decode::uuid(TABLE, "project_id", &row.project_id)?,
            category_id: row_decode::uuid(TABLE, "category_id", &row.category_id)?,
            name: row.name,
            color: row.color,
            created_at: row_decode::timestamp(TABLE, "created_at", row.created_at)?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TaskTagRow {
    task_id: String,
    #[sqlx(flatten)]
    tag: TagRow,
}

pub struct TagRepository;

impl TagRepository {
    pub async fn create<'e, E>(executor: E, tag: &Tag) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tags (id, project_id, category_id, name, color, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(tag.id.to_string())
        .bind(tag.project_id.to_string())
        .bind(tag.category_id.to_string())
        .bind(&tag.name)
        .bind(&tag.color)
        .bind(tag.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Tag>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, TagRow>(
            "SELECT id, project_id, category_id, name, color, created_at FROM tags WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?
        .map(Tag::try_from)
        .transpose()
    }

    /// Tags of a project, optionally narrowed to one category, by name
    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
        category_id: Option<Uuid>,
    ) -> DbErrorResult<Vec<Tag>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, project_id, category_id, name, color, created_at FROM tags WHERE project_id = ",
        );
        builder.push_bind(project_id.to_string());
        if let Some(category_id) = category_id {
            builder
                .push(" AND category_id = ")
                .push_bind(category_id.to_string());
        }
        builder.push(" ORDER BY name ASC, id ASC");

        builder
            .build_query_as::<TagRow>()
            .fetch_all(executor)
            .await?
            .into_iter()
            .map(Tag::try_from)
            .collect()
    }

    /// Tags linked to one task, by name
    pub async fn find_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Tag>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, TagRow>(
            r#"
                SELECT g.id, g.project_id, g.category_id, g.name, g.color, g.created_at
                FROM task_tags tt
                JOIN tags g ON g.id = tt.tag_id
                WHERE tt.task_id = ?
                ORDER BY g.name ASC, g.id ASC
            "#,
        )
        .bind(task_id.to_string())
        .fetch_all(executor)
        .await?
        .into_iter()
        .map(Tag::try_from)
        .collect()
    }

    /// Task id -> its tags, for every task on a board and/or in a project.
    /// At least one of the two ids should be given.
    pub async fn find_task_tag_map<'e, E>(
        executor: E,
        board_id: Option<Uuid>,
        project_id: Option<Uuid>,
    ) -> DbErrorResult<BTreeMap<Uuid, Vec<Tag>>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new(
            r#"
                SELECT tt.task_id, g.id, g.project_id, g.category_id, g.name, g.color, g.created_at
                FROM task_tags tt
                JOIN tasks t ON t.id = tt.task_id
                JOIN tags g ON g.id = tt.tag_id
                WHERE 1 = 1
            "#,
        );
        if let Some(board_id) = board_id {
            builder
                .push(" AND t.board_id = ")
                .push_bind(board_id.to_string());
        }
        if let Some(project_id) = project_id {
            builder
                .push(" AND t.project_id = ")
                .push_bind(project_id.to_string());
        }
        builder.push(" ORDER BY g.name ASC, g.id ASC");

        let rows = builder
            .build_query_as::<TaskTagRow>()
            .fetch_all(executor)
            .await?;

        let mut map: BTreeMap<Uuid, Vec<Tag>> = BTreeMap::new();
        for row in rows {
            let task_id = row_decode::uuid("task_tags", "task_id", &row.task_id)?;
            map.entry(task_id).or_default().push(Tag::try_from(row.tag)?);
        }

        Ok(map)
    }
}
