use crate::BoardDto;

use kb_core::{ColumnDto, TaskDto};

use serde::Serialize;

/// A board with everything needed to draw it: columns in display order
/// and every non-archived task
#[derive(Debug, Serialize)]
pub struct BoardViewResponse {
    pub board: BoardDto,
    pub columns: Vec<ColumnDto>,
    pub tasks: Vec<TaskDto>,
}
