use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    /// Target column; the current one for a move within the column
    pub column_id: String,
    pub position: f64,
}
