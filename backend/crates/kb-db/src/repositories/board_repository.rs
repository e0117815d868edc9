use crate::Result as DbErrorResult;
use crate::repositories::row_decode;

use kb_core::Board;

use uuid::Uuid;

const TABLE: &str = "boards";

const SELECT_BOARD: &str = "SELECT id, project_id, name, is_default, created_at FROM boards";

#[derive(sqlx::FromRow)]
struct BoardRow {
    id: String,
    project_id: String,
    name: String,
    is_default: bool,
    created_at: i64,
}

impl TryFrom<BoardRow> for Board {
    type Error = crate::DbError;

    fn try_from(row: BoardRow) -> DbErrorResult<Self> {
        Ok(Board {
            id: row_decode::uuid(TABLE, "id", &row.id)?,
            project_id: row_decode::uuid(TABLE, "project_id", &row.project_id)?,
            name: row.name,
            is_default: row.is_default,
            created_at: row_decode::timestamp(TABLE, "created_at", row.created_at)?,
        })
    }
}

pub struct BoardRepository;

impl BoardRepository {
    pub async fn create<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO boards (id, project_id, name, is_default, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(board.id.to_string())
        .bind(board.project_id.to_string())
        .bind(&board.name)
        .bind(board.is_default)
        .bind(board.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, BoardRow>(&format!("{} WHERE id = ?", SELECT_BOARD))
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Board::try_from)
            .transpose()
    }

    /// Oldest first
    pub async fn find_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, BoardRow>(&format!(
            "{} WHERE project_id = ? ORDER BY created_at ASC, id ASC",
            SELECT_BOARD
        ))
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?
        .into_iter()
        .map(Board::try_from)
        .collect()
    }

    /// The board flagged default, else the oldest board of the project
    pub async fn find_default_for_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, BoardRow>(&format!(
            "{} WHERE project_id = ? ORDER BY is_default DESC, created_at ASC, id ASC LIMIT 1",
            SELECT_BOARD
        ))
        .bind(project_id.to_string())
        .fetch_optional(executor)
        .await?
        .map(Board::try_from)
        .transpose()
    }
}
