use kb_core::ColumnDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ColumnListResponse {
    pub columns: Vec<ColumnDto>,
}
