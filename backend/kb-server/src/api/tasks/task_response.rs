use kb_core::TaskDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskDto,
}
