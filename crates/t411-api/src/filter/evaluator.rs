//! Condition evaluation against torrent record fields.
//!
//! Condition values arrive as strings while record fields carry JSON types,
//! so the comparator has two explicit modes:
//!
//! - **Coercing compare** (`==`, `!=`, `<`, `<=`, `>`, `>=`): when the
//!   field is a number or a numeric string and the condition value parses
//!   as a finite number, both sides compare numerically; otherwise the
//!   field's canonical string form compares byte-wise against the condition
//!   value. Under this table `10 == "10"` holds.
//! - **Strict compare** (`===`): the condition value is read as a JSON
//!   scalar when it parses as one (`10` is a number, `true` a bool), and
//!   the field must match it in both JSON type and value. A non-JSON
//!   literal is a string and only matches an identical string field.

use std::cmp::Ordering;

use serde_json::Value;

use super::error::{FilterError, FilterResult};
use super::expression::Expression;

/// Evaluates a raw condition expression against a record field.
///
/// The operator token is resolved here rather than at parse time, so an
/// unknown operator only surfaces when a record actually reaches it.
pub(super) fn eval_condition(expression: &str, field: &Value) -> FilterResult<bool> {
    let expr = Expression::parse(expression);

    let matched = match expr.operator.as_str() {
        "<" => compare_order(field, &expr.value) == Ordering::Less,
        "<=" => compare_order(field, &expr.value) != Ordering::Greater,
        "==" => loose_eq(field, &expr.value),
        "===" => strict_eq(field, &expr.value),
        ">" => compare_order(field, &expr.value) == Ordering::Greater,
        ">=" => compare_order(field, &expr.value) != Ordering::Less,
        "!=" => !loose_eq(field, &expr.value),
        other => return Err(FilterError::unknown_operator(other)),
    };

    Ok(matched)
}

/// Coercing equality.
pub(super) fn loose_eq(field: &Value, value: &str) -> bool {
    if let (Some(lhs), Some(rhs)) = (field_number(field), parse_number(value)) {
        return lhs == rhs;
    }
    string_form(field) == value
}

/// Strict equality: JSON type and value must both match.
pub(super) fn strict_eq(field: &Value, value: &str) -> bool {
    match serde_json::from_str::<Value>(value) {
        Ok(literal) if literal.is_number() || literal.is_boolean() || literal.is_string() => {
            *field == literal
        }
        // `null` and composite literals never match a record field strictly.
        Ok(_) => false,
        // Not a JSON scalar: the value is a plain string.
        Err(_) => matches!(field, Value::String(text) if text == value),
    }
}

/// Coercing ordering: numeric when both sides are numeric, lexicographic
/// over string forms otherwise.
pub(super) fn compare_order(field: &Value, value: &str) -> Ordering {
    if let (Some(lhs), Some(rhs)) = (field_number(field), parse_number(value)) {
        // Neither side can be NaN here, parse_number filters it out.
        return lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal);
    }
    string_form(field).as_str().cmp(value)
}

fn field_number(field: &Value) -> Option<f64> {
    match field {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Canonical string form of a field for the fallback comparisons.
fn string_form(field: &Value) -> String {
    match field {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
