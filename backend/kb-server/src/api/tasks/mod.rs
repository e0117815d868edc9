pub mod add_task_tag_request;
pub mod create_task_request;
pub mod list_tasks_query;
pub mod move_task_request;
pub mod tag_map_query;
pub mod task_count_response;
pub mod task_list_response;
pub mod task_response;
pub mod task_tag_map_response;
pub mod task_tags;
pub mod tasks;
pub mod update_task_request;
