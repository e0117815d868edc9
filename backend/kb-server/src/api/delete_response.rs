use serde::Serialize;

/// Response for delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
