//! Tests for the torrent filter engine.

use serde_json::{json, Value};

use super::*;

fn collect(torrents: Vec<Value>, conditions: Vec<Condition>) -> FilterResult<Vec<Value>> {
    filter(torrents, conditions).collect()
}

// ==================== Expression Parsing Tests ====================

#[test]
fn test_parse_bare_value_defaults_to_loose_equality() {
    let expr = Expression::parse("10");
    assert_eq!(expr.operator, "==");
    assert_eq!(expr.value, "10");
}

#[test]
fn test_parse_operator_and_value() {
    let expr = Expression::parse(">= 5");
    assert_eq!(expr.operator, ">=");
    assert_eq!(expr.value, "5");
}

#[test]
fn test_parse_value_may_contain_spaces() {
    let expr = Expression::parse("!= abc def");
    assert_eq!(expr.operator, "!=");
    assert_eq!(expr.value, "abc def");
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let expr = Expression::parse("  ==   720p  ");
    assert_eq!(expr.operator, "==");
    assert_eq!(expr.value, "720p");
}

#[test]
fn test_parse_keeps_unknown_operator_token() {
    // Validation happens at evaluation time, not here.
    let expr = Expression::parse("?? 5");
    assert_eq!(expr.operator, "??");
    assert_eq!(expr.value, "5");
}

// ==================== Coercing Comparison Tests ====================

#[test]
fn test_loose_equality_coerces_numeric_strings() {
    assert!(evaluator::loose_eq(&json!(10), "10"));
    assert!(evaluator::loose_eq(&json!("10"), "10"));
    assert!(evaluator::loose_eq(&json!(10.0), "10"));
    assert!(evaluator::loose_eq(&json!(" 10"), "10"));
    assert!(!evaluator::loose_eq(&json!(11), "10"));
}

#[test]
fn test_loose_equality_falls_back_to_strings() {
    assert!(evaluator::loose_eq(&json!("abc"), "abc"));
    assert!(!evaluator::loose_eq(&json!("abc"), "abd"));
    // A numeric field never equals a non-numeric value.
    assert!(!evaluator::loose_eq(&json!(10), "abc"));
    assert!(evaluator::loose_eq(&json!(true), "true"));
}

#[test]
fn test_strict_equality_requires_matching_json_type() {
    assert!(evaluator::strict_eq(&json!(10), "10"));
    assert!(!evaluator::strict_eq(&json!("10"), "10"));
    assert!(evaluator::strict_eq(&json!(true), "true"));
    assert!(!evaluator::strict_eq(&json!(1), "true"));
}

#[test]
fn test_strict_equality_non_json_literal_is_a_string() {
    assert!(evaluator::strict_eq(&json!("abc"), "abc"));
    assert!(!evaluator::strict_eq(&json!(10), "abc"));
}

#[test]
fn test_ordering_is_numeric_when_both_sides_parse() {
    use std::cmp::Ordering;

    assert_eq!(evaluator::compare_order(&json!(9), "10"), Ordering::Less);
    assert_eq!(evaluator::compare_order(&json!("9"), "10"), Ordering::Less);
    assert_eq!(evaluator::compare_order(&json!(10), "10"), Ordering::Equal);
    assert_eq!(
        evaluator::compare_order(&json!(200), "30"),
        Ordering::Greater
    );
}

#[test]
fn test_ordering_is_lexicographic_otherwise() {
    use std::cmp::Ordering;

    // As strings, "9" sorts after "10".
    assert_eq!(evaluator::compare_order(&json!("9"), "10a"), Ordering::Greater);
    assert_eq!(evaluator::compare_order(&json!("abc"), "abd"), Ordering::Less);
}

// ==================== Filtering Tests ====================

#[test]
fn test_filter_empty_input_yields_nothing() {
    let matches = collect(vec![], vec![Condition::new("size", "== 10")]).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_filter_without_conditions_passes_everything_through_in_order() {
    let torrents = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];
    let matches = collect(torrents.clone(), vec![]).unwrap();
    assert_eq!(matches, torrents);
}

#[test]
fn test_filter_loose_equality_matches_number_and_numeric_string() {
    let torrents = vec![json!({"size": 10}), json!({"size": "10"}), json!({"size": 5})];
    let matches = collect(torrents, vec![Condition::new("size", "== 10")]).unwrap();
    assert_eq!(matches, vec![json!({"size": 10}), json!({"size": "10"})]);
}

#[test]
fn test_filter_strict_equality_matches_only_the_number() {
    let torrents = vec![json!({"size": 10}), json!({"size": "10"}), json!({"size": 5})];
    let matches = collect(torrents, vec![Condition::new("size", "=== 10")]).unwrap();
    assert_eq!(matches, vec![json!({"size": 10})]);
}

#[test]
fn test_filter_missing_field_excludes_the_record() {
    let torrents = vec![json!({"seeders": 50}), json!({"name": "no seeders field"})];
    let matches = collect(torrents, vec![Condition::new("seeders", "> 10")]).unwrap();
    assert_eq!(matches, vec![json!({"seeders": 50})]);
}

#[test]
fn test_filter_null_field_counts_as_missing() {
    let torrents = vec![json!({"seeders": null})];
    let matches = collect(torrents, vec![Condition::new("seeders", ">= 0")]).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_filter_all_conditions_must_hold() {
    let torrents = vec![
        json!({"seeders": 120, "category": 634}),
        json!({"seeders": 120, "category": 433}),
        json!({"seeders": 2, "category": 634}),
    ];
    let conditions = vec![
        Condition::new("seeders", ">= 100"),
        Condition::new("category", "634"),
    ];
    let matches = collect(torrents, conditions).unwrap();
    assert_eq!(matches, vec![json!({"seeders": 120, "category": 634})]);
}

#[test]
fn test_filter_unknown_operator_is_fatal() {
    let torrents = vec![json!({"size": 1}), json!({"size": 2})];
    let error = collect(torrents, vec![Condition::new("size", "?? 5")]).unwrap_err();
    assert_eq!(error, FilterError::unknown_operator("??"));
}

#[test]
fn test_filter_unknown_operator_surfaces_at_the_offending_record() {
    // The first record lacks the field, so the bad operator is never
    // evaluated for it; the error lands on the second record.
    let torrents = vec![json!({"name": "a"}), json!({"size": 2}), json!({"size": 3})];
    let mut filtered = filter(torrents, vec![Condition::new("size", "?? 5")]);

    assert_eq!(
        filtered.next(),
        Some(Err(FilterError::unknown_operator("??")))
    );
    // The pass is over: nothing more is yielded.
    assert_eq!(filtered.next(), None);
}

#[test]
fn test_filter_missing_field_short_circuits_later_conditions() {
    // The bad second condition is never reached because the first one
    // already fails on the missing field.
    let torrents = vec![json!({"name": "a"})];
    let conditions = vec![
        Condition::new("seeders", "> 10"),
        Condition::new("name", "?? a"),
    ];
    let matches = collect(torrents, conditions).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn test_filter_is_lazy() {
    let torrents = vec![json!({"size": 1}), json!({"size": 2}), json!({"size": 3})];
    let mut filtered = filter(torrents, vec![Condition::new("size", ">= 2")]);

    // Pulling one match must not require draining the input.
    assert_eq!(filtered.next(), Some(Ok(json!({"size": 2}))));
    assert_eq!(filtered.next(), Some(Ok(json!({"size": 3}))));
    assert_eq!(filtered.next(), None);
}

#[test]
fn test_filter_accepts_field_expression_pairs() {
    let torrents = vec![json!({"owner": "3"})];
    let matches: Vec<_> = filter(torrents, vec![("owner", "== 3")])
        .collect::<FilterResult<_>>()
        .unwrap();
    assert_eq!(matches.len(), 1);
}
