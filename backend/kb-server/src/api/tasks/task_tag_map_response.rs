use crate::TagDto;

use std::collections::BTreeMap;

use serde::Serialize;

/// Task id -> tags of that task
#[derive(Debug, Serialize)]
pub struct TaskTagMapResponse {
    pub tags: BTreeMap<String, Vec<TagDto>>,
}
