use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MoveColumnRequest {
    pub position: f64,
}
