pub mod board;
pub mod column;
pub mod column_dto;
pub mod position;
pub mod priority;
pub mod project;
pub mod tag;
pub mod tag_category;
pub mod tag_mode;
pub mod task;
pub mod task_dto;
