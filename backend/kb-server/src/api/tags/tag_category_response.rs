use crate::TagCategoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagCategoryResponse {
    pub category: TagCategoryDto,
}
