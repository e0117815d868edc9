//! Fractional key allocation.
//!
//! Keys are `f64`. Repeated midpoint insertion between the same two
//! neighbours runs out of precision after roughly fifty splits; when that
//! happens [`PositionAllocator::allocate`] returns `None` and the caller
//! renumbers the whole scope with [`PositionAllocator::renumber`].

use crate::Position;

pub const DEFAULT_POSITION: f64 = 1000.0;
pub const DEFAULT_RENUMBER_STEP: f64 = 1000.0;

/// Distance from the neighbour when inserting at either end
pub const END_OFFSET: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAllocator {
    default_position: f64,
    renumber_step: f64,
}

impl Default for PositionAllocator {
    fn default() -> Self {
        Self {
            default_position: DEFAULT_POSITION,
            renumber_step: DEFAULT_RENUMBER_STEP,
        }
    }
}

impl PositionAllocator {
    pub fn new(default_position: f64, renumber_step: f64) -> Self {
        Self {
            default_position,
            renumber_step,
        }
    }

    pub fn default_position(&self) -> f64 {
        self.default_position
    }

    pub fn renumber_step(&self) -> f64 {
        self.renumber_step
    }

    /// Key for an item inserted between `prev` and `next`.
    ///
    /// - both: midpoint
    /// - only `next`: `next - 1`
    /// - only `prev`: `prev + 1`
    /// - neither: the default key
    ///
    /// Returns `None` when no key strictly between the neighbours is
    /// representable (including equal or misordered neighbours).
    pub fn allocate(&self, prev: Option<Position>, next: Option<Position>) -> Option<Position> {
        let candidate = match (prev, next) {
            (Some(p), Some(n)) => (p.value() + n.value()) / 2.0,
            (None, Some(n)) => n.value() - END_OFFSET,
            (Some(p), None) => p.value() + END_OFFSET,
            (None, None) => self.default_position,
        };

        let key = Position::new(candidate).ok()?;

        let above_prev = prev.is_none_or(|p| key > p);
        let below_next = next.is_none_or(|n| key < n);

        (above_prev && below_next).then_some(key)
    }

    /// Key for a newly created item appended after the current maximum.
    /// Creation uses the renumber step so fresh items leave room for moves.
    pub fn append(&self, last: Option<Position>) -> Option<Position> {
        match last {
            None => Position::new(self.default_position).ok(),
            Some(p) => {
                let key = Position::new(p.value() + self.renumber_step).ok()?;
                (key > p).then_some(key)
            }
        }
    }

    /// Fresh, evenly spaced keys for `count` items: `step, 2*step, ...`
    pub fn renumber(&self, count: usize) -> Vec<Position> {
        (1..=count)
            .filter_map(|index| Position::new(index as f64 * self.renumber_step).ok())
            .collect()
    }
}
