use crate::Result as DbErrorResult;
use crate::repositories::row_decode;

use kb_core::Project;

use uuid::Uuid;

const TABLE: &str = "projects";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    created_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = crate::DbError;

    fn try_from(row: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: row_decode::uuid(TABLE, "id", &row.id)?,
            name: row.name,
            created_at: row_decode::timestamp(TABLE, "created_at", row.created_at)?,
        })
    }
}

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO projects (id, name, created_at) VALUES (?, ?, ?)")
            .bind(project.id.to_string())
            .bind(&project.name)
            .bind(project.created_at.timestamp_millis())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, ProjectRow>("SELECT id, name, created_at FROM projects WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    /// Newest first
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, ProjectRow>(
            "SELECT id, name, created_at FROM projects ORDER BY created_at DESC, id ASC",
        )
        .fetch_all(executor)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect()
    }
}
