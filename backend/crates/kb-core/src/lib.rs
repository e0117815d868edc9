pub mod error;
pub mod filter;
pub mod models;
pub mod ordering;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use filter::filter_clause::FilterClause;
pub use filter::filter_evaluator::FilterEvaluator;
pub use filter::task_filter::{TaskFilter, TaskFilterBuilder};
pub use filter::task_filter_params::TaskFilterParams;
pub use filter::task_scope::TaskScope;
pub use models::board::Board;
pub use models::column::Column;
pub use models::column_dto::ColumnDto;
pub use models::position::Position;
pub use models::priority::{MAX_PRIORITY, MIN_PRIORITY, Priority};
pub use models::project::Project;
pub use models::tag::Tag;
pub use models::tag_category::TagCategory;
pub use models::tag_mode::TagMode;
pub use models::task::Task;
pub use models::task_dto::{TaskDto, parse_date};
pub use ordering::ordered_collection::{MovePlan, OrderedCollection};
pub use ordering::position_allocator::{
    DEFAULT_POSITION, DEFAULT_RENUMBER_STEP, END_OFFSET, PositionAllocator,
};
pub use ordering::positioned::Positioned;

pub use error_location::ErrorLocation;
