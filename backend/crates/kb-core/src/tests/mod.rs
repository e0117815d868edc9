mod filter;
mod models;
mod ordering;

use crate::{Column, Position, Priority, Task};

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

pub(crate) fn task_with_priority(column_id: Uuid, value: f64, priority: i64) -> Task {
    let mut task = task_at(column_id, value);
    task.priority = Priority::new(priority).unwrap();
    task
}
