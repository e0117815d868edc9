pub mod board_repository;
pub mod column_repository;
pub mod project_repository;
pub mod tag_category_repository;
pub mod tag_repository;
pub mod task_repository;

mod row_decode;
mod task_filter_sql;
