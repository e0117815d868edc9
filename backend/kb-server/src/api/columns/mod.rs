pub mod column_list_response;
pub mod column_response;
pub mod columns;
pub mod create_column_request;
pub mod list_columns_query;
pub mod move_column_request;
pub mod update_column_request;
