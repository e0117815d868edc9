//! Tag category REST API handlers

use crate::api::input;
use crate::{
    ApiError, ApiResult, AppState, CreateTagCategoryRequest, ListTagCategoriesQuery,
    TagCategoryDto, TagCategoryListResponse, TagCategoryResponse,
};

use kb_core::TagCategory;
use kb_db::{ProjectRepository, TagCategoryRepository};

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/tag-categories?projectId=
pub async fn list_tag_categories(
    State(state): State<AppState>,
    Query(query): Query<ListTagCategoriesQuery>,
) -> ApiResult<Json<TagCategoryListResponse>> {
    let project_id = input::parse_id(&query.project_id, "projectId")?;

    let categories = TagCategoryRepository::find_by_project(&state.pool, project_id).await?;

    Ok(Json(TagCategoryListResponse {
        categories: categories.into_iter().map(TagCategoryDto::from).collect(),
    }))
}

/// POST /api/tag-categories
pub async fn create_tag_category(
    State(state): State<AppState>,
    Json(req): Json<CreateTagCategoryRequest>,
) -> ApiResult<Json<TagCategoryResponse>> {
    let project_id = input::parse_id(&req.project_id, "project_id")?;
    let name = input::sanitize_string(&req.name);
    if name.is_empty() {
        return Err(ApiError::validation("Category name cannot be empty", "name"));
    }

    ProjectRepository::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", project_id))?;

    let position = match req.position {
        Some(position) => position,
        None => TagCategoryRepository::find_by_project(&state.pool, project_id)
            .await?
            .iter()
            .map(|c| c.position + 1)
            .max()
            .unwrap_or(0),
    };

    let mut category = TagCategory::new(project_id, name, position);
    category.color = req.color.as_deref().map(input::sanitize_string);
    TagCategoryRepository::create(&state.pool, &category).await?;

    Ok(Json(TagCategoryResponse {
        category: category.into(),
    }))
}
