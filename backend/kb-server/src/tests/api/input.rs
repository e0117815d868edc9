use crate::ApiError;
use crate::api::input;

use kb_config::ValidationConfig;

use googletest::prelude::*;

fn limits() -> ValidationConfig {
    ValidationConfig {
        max_title_length: 10,
        max_description_length: 20,
    }
}

#[test]
fn given_padded_title_when_checked_then_trimmed() {
    let title = input::title("  Ship it  ", &limits()).unwrap();

    assert_that!(title, eq("Ship it"));
}

#[test]
fn given_blank_title_when_checked_then_rejected() {
    let result = input::title("   ", &limits());

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn given_title_over_limit_when_checked_then_rejected() {
    let result = input::title("eleven char", &limits());

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "title"
    ));
}

#[test]
fn given_multibyte_title_when_checked_then_limit_counts_characters() {
    let result = input::title("ééééééééééé", &limits());
    let at_limit = input::title("éééééééééé", &limits());

    assert!(result.is_err());
    assert_that!(at_limit, ok(anything()));
}

#[test]
fn given_blank_description_when_checked_then_none() {
    let description = input::description(Some("   "), &limits()).unwrap();

    assert_that!(description, none());
}

#[test]
fn given_description_over_limit_when_checked_then_rejected() {
    let result = input::description(Some("a description that is too long"), &limits());

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "description"
    ));
}

#[test]
fn given_huge_position_when_sanitized_then_clamped_to_limit() {
    let high = input::position(1e300, 1e12).unwrap();
    let low = input::position(-1e300, 1e12).unwrap();

    assert_that!(high.value(), eq(1e12));
    assert_that!(low.value(), eq(-1e12));
}

#[test]
fn given_infinite_position_when_sanitized_then_rejected() {
    let result = input::position(f64::INFINITY, 1e12);

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn given_blank_optional_id_when_parsed_then_none() {
    let id = input::parse_optional_id(Some(" "), "assignee_id").unwrap();

    assert_that!(id, none());
}

#[test]
fn given_malformed_date_when_parsed_then_rejected_with_field() {
    let result = input::date(Some("2024-13-01"), "due_date");

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "due_date"
    ));
}

#[test]
fn given_five_digit_year_when_parsed_then_rejected_with_field() {
    let result = input::date(Some("+10000-01-01"), "due_date");

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "due_date"
    ));
}
