//! Storage collaborator seen from a board session.

pub mod http_store;
pub mod sqlite_store;

use crate::BoardResult;

use kb_core::{Column, Position, Task, TaskFilter};

use async_trait::async_trait;
use uuid::Uuid;

/// What a session needs from the authoritative store.
///
/// Listings come back ordered by key, then id. Moves return the persisted
/// record; renumbering writes a whole scope atomically.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Columns of a board
    async fn list_columns(&self, board_id: Uuid) -> BoardResult<Vec<Column>>;

    /// Non-archived tasks of a board matching `filter`
    async fn list_tasks(&self, board_id: Uuid, filter: &TaskFilter) -> BoardResult<Vec<Task>>;

    async fn move_column(&self, column_id: Uuid, position: Position) -> BoardResult<Column>;

    async fn move_task(
        &self,
        task_id: Uuid,
        column_id: Uuid,
        position: Position,
    ) -> BoardResult<Task>;

    async fn renumber_columns(
        &self,
        board_id: Uuid,
        positions: &[(Uuid, Position)],
    ) -> BoardResult<Vec<Column>>;

    async fn renumber_tasks(
        &self,
        column_id: Uuid,
        positions: &[(Uuid, Position)],
    ) -> BoardResult<Vec<Task>>;
}
