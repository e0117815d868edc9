use crate::TagCategoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagCategoryListResponse {
    pub categories: Vec<TagCategoryDto>,
}
