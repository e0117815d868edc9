pub mod create_tag_category_request;
pub mod create_tag_request;
pub mod list_tag_categories_query;
pub mod list_tags_query;
pub mod tag_categories;
pub mod tag_category_dto;
pub mod tag_category_list_response;
pub mod tag_category_response;
pub mod tag_dto;
pub mod tag_list_response;
pub mod tag_response;
pub mod tags;
