pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    boards::{
        board_dto::BoardDto, board_view_response::BoardViewResponse,
        boards::get_board_for_project,
    },
    columns::{
        column_list_response::ColumnListResponse,
        column_response::ColumnResponse,
        columns::{
            create_column, delete_column, list_columns, move_column, renumber_columns,
            update_column,
        },
        create_column_request::CreateColumnRequest,
        list_columns_query::ListColumnsQuery,
        move_column_request::MoveColumnRequest,
        update_column_request::UpdateColumnRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, get_project, list_projects},
    },
    renumber_request::{PositionEntry, RenumberRequest},
    tags::{
        create_tag_category_request::CreateTagCategoryRequest,
        create_tag_request::CreateTagRequest,
        list_tag_categories_query::ListTagCategoriesQuery,
        list_tags_query::ListTagsQuery,
        tag_categories::{create_tag_category, list_tag_categories},
        tag_category_dto::TagCategoryDto,
        tag_category_list_response::TagCategoryListResponse,
        tag_category_response::TagCategoryResponse,
        tag_dto::TagDto,
        tag_list_response::TagListResponse,
        tag_response::TagResponse,
        tags::{create_tag, list_tags},
    },
    tasks::{
        add_task_tag_request::AddTaskTagRequest,
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        move_task_request::MoveTaskRequest,
        tag_map_query::TagMapQuery,
        task_count_response::TaskCountResponse,
        task_list_response::TaskListResponse,
        task_response::TaskResponse,
        task_tag_map_response::TaskTagMapResponse,
        task_tags::{add_task_tag, list_task_tags, remove_task_tag},
        tasks::{
            count_tasks, create_task, delete_task, get_task, list_tasks, move_task,
            renumber_tasks, task_tag_map, update_task,
        },
        update_task_request::UpdateTaskRequest,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
