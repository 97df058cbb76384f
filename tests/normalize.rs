//! Tests for value-list normalization.
use btforms::prelude::*;

#[test]
fn test_split_strips_all_whitespace() {
    assert_eq!(split_and_trim("a , b\n, c"), vec!["a", "b", "c"]);
    assert_eq!(split_and_trim("multi word, value"), vec!["multiword", "value"]);
    assert_eq!(split_and_trim("\ttab\t,\r\nnext"), vec!["tab", "next"]);
}

#[test]
fn test_split_discards_empty_tokens() {
    assert_eq!(split_and_trim(",a,,b,"), vec!["a", "b"]);
    assert!(split_and_trim("").is_empty());
    assert!(split_and_trim(" , ,\n").is_empty());
}

#[test]
fn test_split_keeps_order_and_duplicates() {
    assert_eq!(split_and_trim("b,a,b"), vec!["b", "a", "b"]);
}

#[test]
fn test_render_uses_comma_newline() {
    assert_eq!(render_values(&["red", "green", "blue"]), "red,\ngreen,\nblue");
    assert_eq!(render_values::<&str>(&[]), "");
}

#[test]
fn test_normalization_is_idempotent() {
    let values = vec!["x".to_string(), "y_1".to_string(), "x".to_string()];
    assert_eq!(split_and_trim(&render_values(&values)), values);

    let once = normalize_text(" a ,b ,, c ");
    assert_eq!(once, "a,\nb,\nc");
    assert_eq!(normalize_text(&once), once);
}
