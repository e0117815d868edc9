use crate::tests::pos;
use crate::{DEFAULT_POSITION, PositionAllocator};

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_empty_scope_when_allocated_then_default_position() {
    let allocator = PositionAllocator::default();

    let key = allocator.allocate(None, None);

    assert_that!(key, some(eq(pos(DEFAULT_POSITION))));
}

#[test]
fn given_two_neighbours_when_allocated_then_midpoint() {
    let allocator = PositionAllocator::default();

    let key = allocator.allocate(Some(pos(1000.0)), Some(pos(2000.0)));

    assert_that!(key, some(eq(pos(1500.0))));
}

#[test]
fn given_only_next_when_allocated_then_one_below() {
    let allocator = PositionAllocator::default();

    let key = allocator.allocate(None, Some(pos(1000.0)));

    assert_that!(key, some(eq(pos(999.0))));
}

#[test]
fn given_only_prev_when_allocated_then_one_above() {
    let allocator = PositionAllocator::default();

    let key = allocator.allocate(Some(pos(3000.0)), None);

    assert_that!(key, some(eq(pos(3001.0))));
}

#[test]
fn given_equal_neighbours_when_allocated_then_none() {
    let allocator = PositionAllocator::default();

    let key = allocator.allocate(Some(pos(1000.0)), Some(pos(1000.0)));

    assert_that!(key, none());
}

#[test]
fn given_repeated_splits_when_allocated_then_precision_runs_out() {
    let allocator = PositionAllocator::default();
    let prev = pos(1000.0);
    let mut next = pos(2000.0);
    let mut splits = 0;

    while let Some(key) = allocator.allocate(Some(prev), Some(next)) {
        assert!(key > prev && key < next);
        next = key;
        splits += 1;
        assert!(splits < 200, "precision never ran out");
    }

    assert!(splits > 30);
}

#[test]
fn given_last_key_when_appended_then_one_step_above() {
    let allocator = PositionAllocator::default();

    assert_that!(allocator.append(None), some(eq(pos(1000.0))));
    assert_that!(allocator.append(Some(pos(4000.0))), some(eq(pos(5000.0))));
}

#[test]
fn given_custom_step_when_renumbered_then_evenly_spaced_from_step() {
    let allocator = PositionAllocator::new(1000.0, 10.0);

    let keys = allocator.renumber(3);

    let values: Vec<f64> = keys.iter().map(|k| k.value()).collect();
    assert_that!(values, eq(&vec![10.0, 20.0, 30.0]));
}

#[test]
fn given_zero_items_when_renumbered_then_empty() {
    let allocator = PositionAllocator::default();

    assert_that!(allocator.renumber(0), is_empty());
}

proptest! {
    #[test]
    fn given_distinct_neighbours_when_allocated_then_strictly_between(
        a in -1.0e9f64..1.0e9,
        gap in 1.0e-3f64..1.0e6,
    ) {
        let allocator = PositionAllocator::default();
        let prev = pos(a);
        let next = pos(a + gap);

        if let Some(key) = allocator.allocate(Some(prev), Some(next)) {
            prop_assert!(key > prev);
            prop_assert!(key < next);
        }
    }

    #[test]
    fn given_any_count_when_renumbered_then_strictly_increasing(count in 0usize..500) {
        let keys = PositionAllocator::default().renumber(count);

        prop_assert_eq!(keys.len(), count);
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
