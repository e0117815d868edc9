//! Positioned items grouped by scope and kept in key order.

use crate::{CoreError, CoreResult, Position, PositionAllocator, Positioned};

use std::collections::HashMap;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};
use uuid::Uuid;

/// Result of a move: where the item goes and which keys change.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePlan {
    pub item_id: Uuid,
    pub from_scope: Uuid,
    pub to_scope: Uuid,
    pub previous_position: Position,
    pub position: Position,
    /// Every key of the target scope when the move forced a renumbering,
    /// in display order. Empty otherwise.
    pub renumbered: Vec<(Uuid, Position)>,
}

impl MovePlan {
    /// The item keeps its scope and key
    pub fn is_noop(&self) -> bool {
        self.from_scope == self.to_scope
            && self.previous_position == self.position
            && self.renumbered.is_empty()
    }

    pub fn is_renumbered(&self) -> bool {
        !self.renumbered.is_empty()
    }

    /// Items whose scope or key this plan changes, as (id, scope, key)
    pub fn placements(&self) -> Vec<(Uuid, Uuid, Position)> {
        if self.is_renumbered() {
            self.renumbered
                .iter()
                .map(|(id, position)| (*id, self.to_scope, *position))
                .collect()
        } else if self.is_noop() {
            Vec::new()
        } else {
            vec![(self.item_id, self.to_scope, self.position)]
        }
    }
}

/// Items keyed by id, listed per scope by ascending key with ties broken
/// by id. Listing returns a snapshot; callers list again to see later moves.
#[derive(Debug, Clone)]
pub struct OrderedCollection<T> {
    items: HashMap<Uuid, T>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<T: Positioned> FromIterator<T> for OrderedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|item| (item.id(), item)).collect(),
        }
    }
}

impl<T: Positioned> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.items.contains_key(&id)
    }

    pub fn insert(&mut self, item: T) -> Option<T> {
        self.items.insert(item.id(), item)
    }

    pub fn remove(&mut self, id: Uuid) -> Option<T> {
        self.items.remove(&id)
    }

    /// Every item, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Items of one scope ordered by key, then id
    pub fn list_by_scope(&self, scope_id: Uuid) -> Vec<&T> {
        let mut list: Vec<&T> = self
            .items
            .values()
            .filter(|item| item.scope_id() == scope_id)
            .collect();
        list.sort_by(|a, b| display_order(*a, *b));
        list
    }

    /// All items ordered by scope id, then key, then id
    pub fn ordered(&self) -> Vec<&T> {
        let mut list: Vec<&T> = self.items.values().collect();
        list.sort_by(|a, b| {
            a.scope_id()
                .cmp(&b.scope_id())
                .then_with(|| display_order(*a, *b))
        });
        list
    }

    /// Index of an item within its scope's display order
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        let scope_id = self.items.get(&id)?.scope_id();
        self.list_by_scope(scope_id)
            .iter()
            .position(|item| item.id() == id)
    }

    /// Set scope and key of one item directly (optimistic or restored state)
    #[track_caller]
    pub fn place(&mut self, id: Uuid, scope_id: Uuid, position: Position) -> CoreResult<()> {
        let item = self.items.get_mut(&id).ok_or_else(|| CoreError::ItemNotFound {
            item_id: id,
            location: ErrorLocation::from(Location::caller()),
        })?;
        item.place(scope_id, position);
        Ok(())
    }

    /// Compute a move without applying it.
    ///
    /// Neighbours are taken at `target_index` in the target scope's order
    /// with the moving item excluded; an index past the end appends.
    /// If the allocator cannot produce a distinct key the target scope is
    /// renumbered with the item already in place.
    #[track_caller]
    pub fn plan_move(
        &self,
        allocator: &PositionAllocator,
        item_id: Uuid,
        target_scope: Uuid,
        target_index: usize,
    ) -> CoreResult<MovePlan> {
        let item = self.items.get(&item_id).ok_or_else(|| CoreError::ItemNotFound {
            item_id,
            location: ErrorLocation::from(Location::caller()),
        })?;
        let from_scope = item.scope_id();
        let previous_position = item.position();

        let siblings: Vec<&T> = self
            .list_by_scope(target_scope)
            .into_iter()
            .filter(|other| other.id() != item_id)
            .collect();
        let index = target_index.min(siblings.len());

        // Dropping an item back onto its own slot leaves every key alone
        if from_scope == target_scope && self.index_of(item_id) == Some(index) {
            debug!("Move of {} to index {} is a no-op", item_id, index);
            return Ok(MovePlan {
                item_id,
                from_scope,
                to_scope: target_scope,
                previous_position,
                position: previous_position,
                renumbered: Vec::new(),
            });
        }

        let prev = index
            .checked_sub(1)
            .and_then(|i| siblings.get(i))
            .map(|s| s.position());
        let next = siblings.get(index).map(|s| s.position());

        if let Some(position) = allocator.allocate(prev, next) {
            debug!(
                "Allocated {} for {} between {:?} and {:?} in scope {}",
                position, item_id, prev, next, target_scope
            );
            return Ok(MovePlan {
                item_id,
                from_scope,
                to_scope: target_scope,
                previous_position,
                position,
                renumbered: Vec::new(),
            });
        }

        info!(
            "Position precision exhausted in scope {}, renumbering {} items",
            target_scope,
            siblings.len() + 1
        );

        let mut order: Vec<Uuid> = siblings.iter().map(|s| s.id()).collect();
        order.insert(index, item_id);
        let renumbered = renumber_order(allocator, target_scope, &order)?;
        let position = renumbered[index].1;

        Ok(MovePlan {
            item_id,
            from_scope,
            to_scope: target_scope,
            previous_position,
            position,
            renumbered,
        })
    }

    /// Apply a plan computed by [`plan_move`](Self::plan_move)
    #[track_caller]
    pub fn apply(&mut self, plan: &MovePlan) -> CoreResult<()> {
        for (id, scope_id, position) in plan.placements() {
            self.place(id, scope_id, position)?;
        }
        Ok(())
    }

    /// The single authoritative move: plan, apply, return the plan
    #[track_caller]
    pub fn move_within_or_between_scopes(
        &mut self,
        allocator: &PositionAllocator,
        item_id: Uuid,
        target_scope: Uuid,
        target_index: usize,
    ) -> CoreResult<MovePlan> {
        let plan = self.plan_move(allocator, item_id, target_scope, target_index)?;
        self.apply(&plan)?;
        Ok(plan)
    }

    /// Reassign evenly spaced keys to a whole scope, keeping its order
    #[track_caller]
    pub fn renumber_scope(
        &mut self,
        allocator: &PositionAllocator,
        scope_id: Uuid,
    ) -> CoreResult<Vec<(Uuid, Position)>> {
        let order: Vec<Uuid> = self
            .list_by_scope(scope_id)
            .iter()
            .map(|item| item.id())
            .collect();
        let renumbered = renumber_order(allocator, scope_id, &order)?;
        for (id, position) in &renumbered {
            self.place(*id, scope_id, *position)?;
        }
        Ok(renumbered)
    }
}

fn display_order<T: Positioned>(a: &T, b: &T) -> std::cmp::Ordering {
    a.position()
        .cmp(&b.position())
        .then_with(|| a.id().cmp(&b.id()))
}

#[track_caller]
fn renumber_order(
    allocator: &PositionAllocator,
    scope_id: Uuid,
    order: &[Uuid],
) -> CoreResult<Vec<(Uuid, Position)>> {
    let keys = allocator.renumber(order.len());

    let strictly_increasing = keys.windows(2).all(|pair| pair[0] < pair[1]);
    if keys.len() != order.len() || !strictly_increasing {
        return Err(CoreError::RenumberFailed {
            scope_id,
            message: format!(
                "step {} cannot order {} items",
                allocator.renumber_step(),
                order.len()
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(order.iter().copied().zip(keys).collect())
}
