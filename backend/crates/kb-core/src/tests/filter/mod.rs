mod filter_evaluator;
mod task_filter;
mod task_filter_params;
mod task_scope;
