use crate::{BoardResult, BoardStore};

use kb_core::{Column, Position, Task, TaskFilter, TaskScope};
use kb_db::{ColumnRepository, TaskRepository};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// In-process store backed directly by the repositories
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl BoardStore for SqliteStore {
    async fn list_columns(&self, board_id: Uuid) -> BoardResult<Vec<Column>> {
        Ok(ColumnRepository::find_by_board(&self.pool, board_id).await?)
    }

    async fn list_tasks(&self, board_id: Uuid, filter: &TaskFilter) -> BoardResult<Vec<Task>> {
        Ok(TaskRepository::find_filtered(&self.pool, &TaskScope::board(board_id), filter).await?)
    }

    async fn move_column(&self, column_id: Uuid, position: Position) -> BoardResult<Column> {
        Ok(ColumnRepository::move_to(&self.pool, column_id, position, Utc::now()).await?)
    }

    async fn move_task(
        &self,
        task_id: Uuid,
        column_id: Uuid,
        position: Position,
    ) -> BoardResult<Task> {
        Ok(TaskRepository::move_to(&self.pool, task_id, column_id, position, Utc::now()).await?)
    }

    async fn renumber_columns(
        &self,
        board_id: Uuid,
        positions: &[(Uuid, Position)],
    ) -> BoardResult<Vec<Column>> {
        Ok(ColumnRepository::renumber(&self.pool, board_id, positions, Utc::now()).await?)
    }

    async fn renumber_tasks(
        &self,
        column_id: Uuid,
        positions: &[(Uuid, Position)],
    ) -> BoardResult<Vec<Task>> {
        Ok(TaskRepository::renumber(&self.pool, column_id, positions, Utc::now()).await?)
    }
}
