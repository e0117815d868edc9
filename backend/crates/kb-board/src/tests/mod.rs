
use kb_core::{Column, Position, Task};

use chrono::{Duration, Utc};
use uuid::Uuid;

pub(crate) fn pos(value: f64) -> Position {
    Position::new(value).unwrap()
}

pub(crate) fn column_at(board_id: Uuid, value: f64) -> Column {
    Column::new(board_id, format!("Column {}", value), pos(value))
}

pub(crate) fn task_at(column_id: Uuid, value: f64) -> Task {
    Task::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        column_id,
        format!("Task {}", value),
        pos(value),
    )
}

/// The same task as the store would return it after another client moved it
pub(crate) fn moved_elsewhere(task: &Task, column_id: Uuid, value: f64) -> Task {
    let mut moved = task.clone();
    moved.column_id = column_id;
    moved.position = pos(value);
    moved.updated_at = task.updated_at + Duration::seconds(1);
    moved
}

pub(crate) fn archived(task: &Task) -> Task {
    let mut archived = task.clone();
    archived.archived_at = Some(Utc::now());
    archived
}
