use serde::Deserialize;

/// One fresh key of a renumbered scope
#[derive(Debug, Deserialize)]
pub struct PositionEntry {
    pub id: String,
    pub position: f64,
}

/// Body of the scope renumbering endpoints, in display order
#[derive(Debug, Deserialize)]
pub struct RenumberRequest {
    pub positions: Vec<PositionEntry>,
}
