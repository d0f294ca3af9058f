//! Declarative filter engine for torrent result sets.
//!
//! This module filters the loosely structured records the listing endpoints
//! return, without materializing the whole result set: [`filter`] is a lazy,
//! single-pass iterator adapter.
//!
//! # Conditions
//!
//! A [`Condition`] names a record field and a comparison expression. The
//! expression is an operator token followed by a space and a value; without
//! an operator the value is matched with `==`:
//!
//! - `"== 10"`, `"10"` - coercing equality (`10` matches both the number
//!   `10` and the string `"10"`)
//! - `"=== 10"` - strict equality (JSON type must match too)
//! - `"!= fr"` - coercing inequality
//! - `"< 5"`, `"<= 5"`, `"> 5"`, `">= 5"` - ordering, numeric when both
//!   sides are numeric, lexicographic otherwise
//!
//! All conditions of a set must hold (logical AND). A record that lacks the
//! referenced field (or carries JSON `null` there) fails the condition
//! immediately and is skipped without evaluating the remaining conditions;
//! that is never an error. An unknown operator token is an error and ends
//! the whole pass.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use t411_api_rs::filter::{filter, Condition};
//!
//! let torrents = vec![
//!     json!({"name": "debian-12.iso", "seeders": 120}),
//!     json!({"name": "old.iso", "seeders": 3}),
//! ];
//!
//! let conditions = vec![Condition::new("seeders", ">= 100")];
//! let matches: Vec<_> = filter(torrents, conditions)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(matches.len(), 1);
//! ```

mod error;
mod evaluator;
mod expression;

pub use error::{FilterError, FilterResult};
pub use expression::Expression;

use serde_json::Value;

/// A single filter condition: a record field paired with an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    field: String,
    expression: String,
}

impl Condition {
    /// Creates a condition on `field` from a raw expression string.
    pub fn new(field: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expression: expression.into(),
        }
    }

    /// The record field this condition reads.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The raw expression string.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Evaluates this condition against a record.
    ///
    /// A missing or `null` field is `Ok(false)`; an unknown operator is an
    /// error. The operator is resolved here, at evaluation time, so a bad
    /// condition only surfaces once a record actually reaches it.
    pub fn matches(&self, torrent: &Value) -> FilterResult<bool> {
        match torrent.get(&self.field) {
            None | Some(Value::Null) => Ok(false),
            Some(field) => evaluator::eval_condition(&self.expression, field),
        }
    }
}

impl<F, E> From<(F, E)> for Condition
where
    F: Into<String>,
    E: Into<String>,
{
    fn from((field, expression): (F, E)) -> Self {
        Condition::new(field, expression)
    }
}

/// Lazily filters `torrents` down to the records satisfying every condition.
///
/// The returned iterator is single-pass and preserves input order; with an
/// empty condition set it yields every record unchanged. The first
/// [`FilterError`] ends the pass: it is yielded in place of the offending
/// record and the iterator is exhausted afterwards.
pub fn filter<I, C>(torrents: I, conditions: C) -> Filtered<I::IntoIter>
where
    I: IntoIterator<Item = Value>,
    C: IntoIterator,
    C::Item: Into<Condition>,
{
    Filtered {
        torrents: torrents.into_iter(),
        conditions: conditions.into_iter().map(Into::into).collect(),
        done: false,
    }
}

/// Iterator returned by [`filter`].
#[derive(Debug)]
pub struct Filtered<I> {
    torrents: I,
    conditions: Vec<Condition>,
    done: bool,
}

impl<I> Iterator for Filtered<I>
where
    I: Iterator<Item = Value>,
{
    type Item = FilterResult<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for torrent in self.torrents.by_ref() {
            match matches_all(&self.conditions, &torrent) {
                Ok(true) => return Some(Ok(torrent)),
                Ok(false) => continue,
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }

        self.done = true;
        None
    }
}

/// Short-circuit AND over the condition set.
fn matches_all(conditions: &[Condition], torrent: &Value) -> FilterResult<bool> {
    for condition in conditions {
        if !condition.matches(torrent)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests;
