//! Tag REST API handlers

use crate::api::input;
use crate::{
    ApiError, ApiResult, AppState, CreateTagRequest, ListTagsQuery, TagDto, TagListResponse,
    TagResponse,
};

use kb_core::Tag;
use kb_db::{TagCategoryRepository, TagRepository};

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/tags?projectId=&categoryId=
///
/// Ordered by name.
pub async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<ListTagsQuery>,
) -> ApiResult<Json<TagListResponse>> {
    let project_id = input::parse_id(&query.project_id, "projectId")?;
    let category_id = input::parse_optional_id(query.category_id.as_deref(), "categoryId")?;

    let tags = TagRepository::find_by_project(&state.pool, project_id, category_id).await?;

    Ok(Json(TagListResponse {
        tags: tags.into_iter().map(TagDto::from).collect(),
    }))
}

/// POST /api/tags
///
/// The tag joins the project of its category.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(req): Json<CreateTagRequest>,
) -> ApiResult<Json<TagResponse>> {
    let category_id = input::parse_id(&req.category_id, "category_id")?;
    let name = input::sanitize_string(&req.name);
    if name.is_empty() {
        return Err(ApiError::validation("Tag name cannot be empty", "name"));
    }

    let category = TagCategoryRepository::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Tag category", category_id))?;

    let mut tag = Tag::new(category.project_id, category.id, name);
    tag.color = req.color.as_deref().map(input::sanitize_string);
    TagRepository::create(&state.pool, &tag).await?;

    Ok(Json(TagResponse { tag: tag.into() }))
}
