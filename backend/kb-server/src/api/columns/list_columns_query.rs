use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListColumnsQuery {
    #[serde(rename = "boardId")]
    pub board_id: String,
}
