use crate::Position;

use uuid::Uuid;

/// An entity ordered by a [`Position`] inside a parent scope
/// (a board for columns, a column for tasks).
pub trait Positioned {
    fn id(&self) -> Uuid;

    fn scope_id(&self) -> Uuid;

    fn position(&self) -> Position;

    /// Last-modified marker used in content signatures
    fn modified_marker(&self) -> i64;

    /// Assign a new scope and key
    fn place(&mut self, scope_id: Uuid, position: Position);
}
