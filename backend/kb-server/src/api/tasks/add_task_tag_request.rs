use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddTaskTagRequest {
    pub tag_id: String,
}
