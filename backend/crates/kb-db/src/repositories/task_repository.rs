use crate::repositories::{row_decode, task_filter_sql};
use crate::{DbError, Result as DbErrorResult};

use kb_core::{Position, Task, TaskFilter, TaskScope};

use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "tasks";

/// Tag ids travel with each task as one comma-joined column
const SELECT_TASK: &str = r#"
    SELECT
        t.id, t.project_id, t.board_id, t.column_id, t.title, t.description,
        t.assignee_id, t.priority, t.position, t.start_date, t.due_date,
        t.created_at, t.updated_at, t.archived_at,
        (SELECT group_concat(tt.tag_id) FROM task_tags tt WHERE tt.task_id = t.id) AS tag_ids
    FROM tasks t
"#;

const ORDER_BY_POSITION: &str = " ORDER BY t.position ASC, t.id ASC";

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    project_id: String,
    board_id: String,
    column_id: String,
    title: String,
    description: Option<String>,
    assignee_id: Option<String>,
    priority: i64,
    position: f64,
    start_date: Option<String>,
    due_date: Option<String>,
    created_at: i64,
    updated_at: i64,
    archived_at: Option<i64>,
    tag_ids: Option<String>,
}

impl TryFrom<TaskRow> for Task {
    type Error = DbError;

    fn try_from(row: TaskRow) -> DbErrorResult<Self> {
        Ok(Task {
            id: row_decode::uuid(TABLE, "id", &row.id)?,
            project_id: row_decode::uuid(TABLE, "project_id", &row.project_id)?,
            board_id: row_decode::uuid(TABLE, "board_id", &row.board_id)?,
            column_id: row_decode::uuid(TABLE, "column_id", &row.column_id)?,
            title: row.title,
            description: row.description,
            priority: row_decode::priority(TABLE, row.priority)?,
            position: row_decode::position(TABLE, row.position)?,
            assignee_id: row_decode::optional_uuid(
                TABLE,
                "assignee_id",
                row.assignee_id.as_deref(),
            )?,
            start_date: row_decode::date(TABLE, row.start_date.as_deref())?,
            due_date: row_decode::date(TABLE, row.due_date.as_deref())?,
            tags: row_decode::uuid_list(TABLE, "tag_ids", row.tag_ids.as_deref())?
                .into_iter()
                .collect(),
            created_at: row_decode::timestamp(TABLE, "created_at", row.created_at)?,
            updated_at: row_decode::timestamp(TABLE, "updated_at", row.updated_at)?,
            archived_at: row
                .archived_at
                .map(|ms| row_decode::timestamp(TABLE, "archived_at", ms))
                .transpose()?,
        })
    }
}

fn date_text(date: Option<chrono::NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

pub struct TaskRepository;

impl TaskRepository {
    /// Inserts the task row; tag links are added with [`add_tag`](Self::add_tag)
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tasks (
                    id, project_id, board_id, column_id, title, description,
                    assignee_id, priority, position, start_date, due_date,
                    created_at, updated_at, archived_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.project_id.to_string())
        .bind(task.board_id.to_string())
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(i64::from(task.priority.value()))
        .bind(task.position.value())
        .bind(date_text(task.start_date))
        .bind(date_text(task.due_date))
        .bind(task.created_at.timestamp_millis())
        .bind(task.updated_at.timestamp_millis())
        .bind(task.archived_at.map(|dt| dt.timestamp_millis()))
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Finds archived tasks too
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query_as::<_, TaskRow>(&format!("{} WHERE t.id = ?", SELECT_TASK))
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    /// Active tasks of one column in display order
    pub async fn find_by_column<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        Self::find_filtered(executor, &TaskScope::column(column_id), &TaskFilter::default()).await
    }

    /// Active tasks of a whole board, ordered by key within the board
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        Self::find_filtered(executor, &TaskScope::board(board_id), &TaskFilter::default()).await
    }

    /// Active tasks in `scope` that satisfy `filter`, ordered by key then id
    pub async fn find_filtered<'e, E>(
        executor: E,
        scope: &TaskScope,
        filter: &TaskFilter,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let clauses = filter.clauses();
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_TASK);
        task_filter_sql::push_conditions(&mut builder, scope, &clauses);
        builder.push(ORDER_BY_POSITION);

        debug!(
            "Listing tasks for {:?} with {} filter clauses",
            scope,
            clauses.len()
        );

        builder
            .build_query_as::<TaskRow>()
            .fetch_all(executor)
            .await?
            .into_iter()
            .map(Task::try_from)
            .collect()
    }

    pub async fn count_filtered<'e, E>(
        executor: E,
        scope: &TaskScope,
        filter: &TaskFilter,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let clauses = filter.clauses();
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tasks t");
        task_filter_sql::push_conditions(&mut builder, scope, &clauses);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Highest key among active tasks of a column, used to append new tasks
    pub async fn max_position<'e, E>(
        executor: E,
        column_id: Uuid,
    ) -> DbErrorResult<Option<Position>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<f64> = sqlx::query_scalar(
            "SELECT MAX(position) FROM tasks WHERE column_id = ? AND archived_at IS NULL",
        )
        .bind(column_id.to_string())
        .fetch_one(executor)
        .await?;

        max.map(|value| row_decode::position(TABLE, value)).transpose()
    }

    /// Persist every editable field. Returns false when the task is gone.
    pub async fn update<'e, E>(executor: E, task: &Task) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tasks
                SET column_id = ?, title = ?, description = ?, assignee_id = ?,
                    priority = ?, position = ?, start_date = ?, due_date = ?,
                    updated_at = ?, archived_at = ?
                WHERE id = ?
            "#,
        )
        .bind(task.column_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(i64::from(task.priority.value()))
        .bind(task.position.value())
        .bind(date_text(task.start_date))
        .bind(date_text(task.due_date))
        .bind(task.updated_at.timestamp_millis())
        .bind(task.archived_at.map(|dt| dt.timestamp_millis()))
        .bind(task.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Set column and key of one task and return the stored record
    pub async fn move_to(
        pool: &SqlitePool,
        id: Uuid,
        column_id: Uuid,
        position: Position,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Task> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE tasks SET column_id = ?, position = ?, updated_at = ? WHERE id = ?",
        )
        .bind(column_id.to_string())
        .bind(position.value())
        .bind(updated_at.timestamp_millis())
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Task", id));
        }

        let task = Self::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DbError::not_found("Task", id))?;

        tx.commit().await?;

        debug!("Task {} moved to column {} at {}", id, column_id, position);
        Ok(task)
    }

    /// Write fresh keys for a whole column in one transaction. Every listed
    /// task lands in `column_id`; a task of another board fails the whole
    /// renumbering as not found.
    pub async fn renumber(
        pool: &SqlitePool,
        column_id: Uuid,
        positions: &[(Uuid, Position)],
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<Vec<Task>> {
        let mut tx = pool.begin().await?;

        for (id, position) in positions {
            let result = sqlx::query(
                r#"
                UPDATE tasks SET column_id = ?, position = ?, updated_at = ?
                WHERE id = ?
                  AND board_id = (SELECT board_id FROM board_columns WHERE id = ?)
                "#,
            )
            .bind(column_id.to_string())
            .bind(position.value())
            .bind(updated_at.timestamp_millis())
            .bind(id.to_string())
            .bind(column_id.to_string())
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::not_found("Task", id));
            }
        }

        let tasks = Self::find_by_column(&mut *tx, column_id).await?;
        tx.commit().await?;

        info!("Renumbered {} tasks in column {}", positions.len(), column_id);
        Ok(tasks)
    }

    /// Link a tag. Returns false when the link already existed.
    pub async fn add_tag<'e, E>(executor: E, task_id: Uuid, tag_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?, ?)")
            .bind(task_id.to_string())
            .bind(tag_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Unlink a tag. Returns false when there was no link.
    pub async fn remove_tag<'e, E>(
        executor: E,
        task_id: Uuid,
        tag_id: Uuid,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM task_tags WHERE task_id = ? AND tag_id = ?")
            .bind(task_id.to_string())
            .bind(tag_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
