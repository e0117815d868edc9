pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::tag_category_repository::TagCategoryRepository;
pub use repositories::tag_repository::TagRepository;
pub use repositories::task_repository::TaskRepository;
