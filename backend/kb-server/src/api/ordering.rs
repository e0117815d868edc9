//! Keys for items the server places itself.

use crate::api::input;
use crate::{ApiError, ApiResult, AppState, RenumberRequest};

use kb_core::{CoreError, ErrorLocation, Position};

use std::collections::HashSet;
use std::panic::Location;

use uuid::Uuid;

/// Key for a new item: the client's key when given, else after the last
/// item of the scope
#[track_caller]
pub fn new_item_position(
    state: &AppState,
    requested: Option<f64>,
    last: Option<Position>,
    scope_id: Uuid,
) -> ApiResult<Position> {
    if let Some(value) = requested {
        return input::position(value, state.board.position_limit);
    }

    state.allocator().append(last).ok_or_else(|| {
        CoreError::PrecisionExhausted {
            scope_id,
            location: ErrorLocation::from(Location::caller()),
        }
        .into()
    })
}

/// Parse a renumbering body; every id at most once
#[track_caller]
pub fn renumber_positions(
    state: &AppState,
    req: &RenumberRequest,
) -> ApiResult<Vec<(Uuid, Position)>> {
    let mut seen = HashSet::new();

    req.positions
        .iter()
        .map(|entry| {
            let id = input::parse_id(&entry.id, "positions")?;
            if !seen.insert(id) {
                return Err(ApiError::validation(
                    format!("Item {} listed more than once", id),
                    "positions",
                ));
            }
            let position = input::position(entry.position, state.board.position_limit)?;
            Ok((id, position))
        })
        .collect()
}
