use crate::TagMode;

use std::str::FromStr;

#[test]
fn test_tag_mode_as_str() {
    assert_eq!(TagMode::And.as_str(), "and");
    assert_eq!(TagMode::Or.as_str(), "or");
}

#[test]
fn test_tag_mode_from_str() {
    assert_eq!(TagMode::from_str("and").unwrap(), TagMode::And);
    assert_eq!(TagMode::from_str("OR").unwrap(), TagMode::Or);
    assert!(TagMode::from_str("xor").is_err());
}

#[test]
fn test_tag_mode_default_is_or() {
    assert_eq!(TagMode::default(), TagMode::Or);
}
