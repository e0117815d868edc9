use crate::Position;

use googletest::prelude::*;

#[test]
fn given_nan_when_creating_position_then_rejected() {
    assert_that!(Position::new(f64::NAN), err(anything()));
    assert_that!(Position::new(f64::INFINITY), err(anything()));
}

#[test]
fn given_negative_zero_when_compared_then_equals_zero() {
    let a = Position::new(-0.0).unwrap();
    let b = Position::new(0.0).unwrap();
    assert_that!(a, eq(b));
}

#[test]
fn given_out_of_range_value_when_sanitized_then_clamped_to_limit() {
    let high = Position::sanitize(5e15, 1e12).unwrap();
    let low = Position::sanitize(-5e15, 1e12).unwrap();

    assert_that!(high.value(), eq(1e12));
    assert_that!(low.value(), eq(-1e12));
}

#[test]
fn given_positions_when_sorted_then_ascending() {
    let mut keys = vec![
        Position::new(3.0).unwrap(),
        Position::new(-1.5).unwrap(),
        Position::new(2.25).unwrap(),
    ];
    keys.sort();
    let values: Vec<f64> = keys.iter().map(|p| p.value()).collect();
    assert_that!(values, eq(&vec![-1.5, 2.25, 3.0]));
}

#[test]
fn given_finite_f64_when_converted_then_position() {
    let position = Position::try_from(999.5).unwrap();
    assert_that!(f64::from(position), eq(999.5));
}
