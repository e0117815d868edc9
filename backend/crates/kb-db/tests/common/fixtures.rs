#![allow(dead_code)]

use kb_core::{Board, Column, Position, Priority, Project, Tag, TagCategory, Task};
use kb_db::{
    BoardRepository, ColumnRepository, ProjectRepository, TagCategoryRepository, TagRepository,
    TaskRepository,
};

use chrono::NaiveDate;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SeededBoard {
    pub project: Project,
    pub board: Board,
    pub columns: Vec<Column>,
}

pub fn pos(value: f64) -> Position {
    Position::new(value).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A project with a default board holding columns at 1000, 2000, 3000, ...
pub async fn seed_board(pool: &SqlitePool, column_count: usize) -> SeededBoard {
    let project = Project::new("Test Project".to_string());
    ProjectRepository::create(pool, &project).await.unwrap();

    let board = Board::new_default(project.id, "Main".to_string());
    BoardRepository::create(pool, &board).await.unwrap();

    let mut columns = Vec::new();
    for i in 0..column_count {
        let column = Column::new(
            board.id,
            format!("Column {}", i + 1),
            pos((i as f64 + 1.0) * 1000.0),
        );
        ColumnRepository::create(pool, &column).await.unwrap();
        columns.push(column);
    }

    SeededBoard {
        project,
        board,
        columns,
    }
}

pub fn build_task(seed: &SeededBoard, column: &Column, title: &str, position: f64) -> Task {
    Task::new(
        seed.project.id,
        seed.board.id,
        column.id,
        title.to_string(),
        pos(position),
    )
}

pub async fn insert_task(
    pool: &SqlitePool,
    seed: &SeededBoard,
    column: &Column,
    title: &str,
    position: f64,
) -> Task {
    let task = build_task(seed, column, title, position);
    TaskRepository::create(pool, &task).await.unwrap();
    task
}

pub async fn insert_task_with(pool: &SqlitePool, task: &Task) {
    TaskRepository::create(pool, task).await.unwrap();
    for tag_id in &task.tags {
        TaskRepository::add_tag(pool, task.id, *tag_id).await.unwrap();
    }
}

pub async fn seed_tags(
    pool: &SqlitePool,
    project_id: Uuid,
    names: &[&str],
) -> (TagCategory, Vec<Tag>) {
    let category = TagCategory::new(project_id, "Area".to_string(), 0);
    TagCategoryRepository::create(pool, &category).await.unwrap();

    let mut tags = Vec::new();
    for name in names {
        let tag = Tag::new(project_id, category.id, name.to_string());
        TagRepository::create(pool, &tag).await.unwrap();
        tags.push(tag);
    }

    (category, tags)
}

pub fn with_priority(mut task: Task, priority: i64) -> Task {
    task.priority = Priority::new(priority).unwrap();
    task
}
