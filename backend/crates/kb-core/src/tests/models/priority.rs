use crate::Priority;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_values_in_range_when_created_then_ok() {
    for value in 0..=4 {
        assert_that!(Priority::new(value), ok(anything()));
    }
}

#[test]
fn given_values_out_of_range_when_created_then_invalid_priority() {
    assert_that!(Priority::new(-1), err(anything()));
    assert_that!(Priority::new(5), err(anything()));
}

#[test]
fn given_text_when_parsed_then_priority() {
    assert_that!(Priority::from_str(" 3 ").unwrap().value(), eq(3));
    assert_that!(Priority::from_str("high"), err(anything()));
}

#[test]
fn given_default_priority_then_zero() {
    assert_that!(Priority::default().value(), eq(0));
}
