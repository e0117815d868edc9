use crate::repositories::row_decode;
use crate::{DbError, Result as DbErrorResult};

use kb_core::{Column, Position};

use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

const TABLE: &str = "board_columns";

const SELECT_COLUMN: &str = r#"
    SELECT id, board_id, title, color, position, created_at, updated_at
    FROM board_columns
"#;

#[derive(sqlx::FromRow)]
struct ColumnRow {
    id: String,
    board_id: String,
    title: String,
    color: Option<String>,
    position: f64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ColumnRow> for Column {
    type Error = DbError;

    fn try_from(row: ColumnRow) -> DbErrorResult<Self> {
        Ok(Column {
            id: row_decode::uuid(TABLE, "id", &row.id)?,
            board_id: row_decode::uuid(TABLE, "board_id", &row.board_id)?,
            title: row.title,
            color: row.color,
            position: row_decode::position(TABLE, row.position)?,
            created_at: row_decode::timestamp(TABLE, "created_at", row.created_at)?,
            updated_at: row_decode::timestamp(TABLE, "updated_at", row.updated_at)?,
        })
    }
}

pub struct ColumnRepository;

impl ColumnRepository {
    pub async fn create<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO board_columns (
                    id, board_id, title, color, position, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.title)
        .bind(&column.color)
        .bind(column.position.value())
        .bind(column.created_at.timestamp_millis())
        .bind(column.updated_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, ColumnRow>(&format!("{} WHERE id = ?", SELECT_COLUMN))
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Column::try_from)
            .transpose()
    }

    /// Columns of a board in display order
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, ColumnRow>(&format!(
            "{} WHERE board_id = ? ORDER BY position ASC, id ASC",
            SELECT_COLUMN
        ))
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?
        .into_iter()
        .map(Column::try_from)
        .collect()
    }

    /// Highest key on the board, used to append new columns
    pub async fn max_position<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Option<Position>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<f64> =
            sqlx::query_scalar("SELECT MAX(position) FROM board_columns WHERE board_id = ?")
                .bind(board_id.to_string())
                .fetch_one(executor)
                .await?;

        max.map(|value| row_decode::position(TABLE, value)).transpose()
    }

    /// Persist title, color and key. Returns false when the column is gone.
    pub async fn update<'e, E>(executor: E, column: &Column) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE board_columns
                SET title = ?, color = ?, position = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&column.title)
        .bind(&column.color)
        .bind(column.position.value())
        .bind(column.updated_at.timestamp_millis())
        .bind(column.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the column and, through the foreign key, its tasks
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM board_columns WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Set one column's key and return the stored record
    pub async fn move_to(
        pool: &SqlitePool,
        id: Uuid,
        position: Position,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Column> {
        let mut tx = pool.begin().await?;

        let result =
            sqlx::query("UPDATE board_columns SET position = ?, updated_at = ? WHERE id = ?")
                .bind(position.value())
                .bind(updated_at.timestamp_millis())
                .bind(id.to_string())
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Column", id));
        }

        let column = Self::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DbError::not_found("Column", id))?;

        tx.commit().await?;

        debug!("Column {} moved to {}", id, position);
        Ok(column)
    }

    /// Write fresh keys for a whole board in one transaction
    pub async fn renumber(
        pool: &SqlitePool,
        board_id: Uuid,
        positions: &[(Uuid, Position)],
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Vec<Column>> {
        let mut tx = pool.begin().await?;

        for (id, position) in positions {
            let result = sqlx::query(
                "UPDATE board_columns SET position = ?, updated_at = ? WHERE id = ? AND board_id = ?",
            )
            .bind(position.value())
            .bind(updated_at.timestamp_millis())
            .bind(id.to_string())
            .bind(board_id.to_string())
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::not_found("Column", id));
            }
        }

        let columns = Self::find_by_board(&mut *tx, board_id).await?;
        tx.commit().await?;

        info!("Renumbered {} columns on board {}", positions.len(), board_id);
        Ok(columns)
    }
}
