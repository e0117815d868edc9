pub mod filter_clause;
pub mod filter_evaluator;
pub mod task_filter;
pub mod task_filter_params;
pub mod task_scope;
