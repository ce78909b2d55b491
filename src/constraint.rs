//! Named predicates evaluated against keyed properties of the current node.
//!
//! Mirrors how an assertion library's constraint objects work: the cursor
//! looks the property up once, then hands the value to the constraint, which
//! either accepts it or renders a failure message naming the value and the
//! expectation.

use serde_json::{Number, Value};

use crate::cursor::{Cursor, NodeKey};
use crate::errors::{WalkError, WalkResult};

/// A predicate over a single JSON value.
pub enum Constraint<'a> {
    /// Strict type-and-value equality, no coercion.
    Identical(Value),
    /// Value equality where numbers compare numerically across integer and
    /// float representations.
    Equal(Value),
    /// The value, treated as text, contains the given substring.
    Contains(String),
    /// An externally supplied predicate accepts the value.
    Callback(&'a dyn Fn(&Value) -> bool),
    IsNull,
    IsNotNull,
    IsTrue,
    IsFalse,
}

impl Constraint<'_> {
    /// Evaluate against `actual`; `Err` carries the failure message.
    fn evaluate(&self, actual: &Value) -> Result<(), String> {
        match self {
            Constraint::Identical(expected) => {
                if actual == expected {
                    Ok(())
                } else {
                    Err(format!("{actual} is not identical to {expected}"))
                }
            }
            Constraint::Equal(expected) => {
                if loose_eq(actual, expected) {
                    Ok(())
                } else {
                    Err(format!("{actual} is not equal to {expected}"))
                }
            }
            Constraint::Contains(needle) => {
                let text = match actual {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                if text.contains(needle.as_str()) {
                    Ok(())
                } else {
                    Err(format!("{actual} does not contain {needle:?}"))
                }
            }
            Constraint::Callback(predicate) => {
                if predicate(actual) {
                    Ok(())
                } else {
                    Err(format!("{actual} was not accepted by the callback"))
                }
            }
            Constraint::IsNull => {
                if actual.is_null() {
                    Ok(())
                } else {
                    Err(format!("{actual} is not null"))
                }
            }
            Constraint::IsNotNull => {
                if actual.is_null() {
                    Err("null is null".to_string())
                } else {
                    Ok(())
                }
            }
            Constraint::IsTrue => {
                if actual == &Value::Bool(true) {
                    Ok(())
                } else {
                    Err(format!("{actual} is not true"))
                }
            }
            Constraint::IsFalse => {
                if actual == &Value::Bool(false) {
                    Ok(())
                } else {
                    Err(format!("{actual} is not false"))
                }
            }
        }
    }
}

/// Loose equality: numbers compare by numeric value regardless of their
/// integer or float representation; every other cross-type pair is unequal.
fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => numbers_eq(l, r),
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| loose_eq(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, a)| r.get(key).is_some_and(|b| loose_eq(a, b)))
        }
        _ => left == right,
    }
}

fn numbers_eq(left: &Number, right: &Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

impl<'a> Cursor<'a> {
    /// Assert that `property` of the current node satisfies `constraint`.
    ///
    /// The key must be present (`MissingKey` otherwise); a failing
    /// constraint turns into `AssertionFailed` with the constraint's
    /// message. On success the cursor passes through unchanged.
    pub fn property_is(self, property: &str, constraint: Constraint<'_>) -> WalkResult<Self> {
        let value = self.data().get(property).ok_or_else(|| WalkError::MissingKey {
            key: NodeKey::Name(property.to_string()),
            node: self.key().clone(),
        })?;
        constraint.evaluate(value).map_err(WalkError::AssertionFailed)?;
        Ok(self)
    }

    /// Strict type-and-value equality of `property`.
    pub fn assert_identical(self, property: &str, expected: impl Into<Value>) -> WalkResult<Self> {
        self.property_is(property, Constraint::Identical(expected.into()))
    }

    /// Numeric-coercing equality of `property`.
    pub fn assert_equal(self, property: &str, expected: impl Into<Value>) -> WalkResult<Self> {
        self.property_is(property, Constraint::Equal(expected.into()))
    }

    /// `property` equals the given container under loose equality.
    pub fn assert_equal_container(
        self,
        property: &str,
        expected: impl Into<Value>,
    ) -> WalkResult<Self> {
        self.property_is(property, Constraint::Equal(expected.into()))
    }

    /// `property`, treated as text, contains `needle`.
    pub fn assert_contains(self, property: &str, needle: &str) -> WalkResult<Self> {
        self.property_is(property, Constraint::Contains(needle.to_string()))
    }

    /// `predicate` accepts the value of `property`.
    pub fn assert_callback(
        self,
        property: &str,
        predicate: impl Fn(&Value) -> bool,
    ) -> WalkResult<Self> {
        self.property_is(property, Constraint::Callback(&predicate))
    }

    pub fn assert_is_null(self, property: &str) -> WalkResult<Self> {
        self.property_is(property, Constraint::IsNull)
    }

    pub fn assert_is_not_null(self, property: &str) -> WalkResult<Self> {
        self.property_is(property, Constraint::IsNotNull)
    }

    pub fn assert_is_true(self, property: &str) -> WalkResult<Self> {
        self.property_is(property, Constraint::IsTrue)
    }

    pub fn assert_is_false(self, property: &str) -> WalkResult<Self> {
        self.property_is(property, Constraint::IsFalse)
    }

    /// `property` must NOT be present in the current node.
    ///
    /// The one predicate that inverts the presence precondition: a present
    /// key is an `AssertionFailed`, never a `MissingKey`.
    pub fn assert_key_absent(self, property: &str) -> WalkResult<Self> {
        if self.data().get(property).is_some() {
            return Err(WalkError::AssertionFailed(format!(
                "key {property:?} is present in node \"{}\"",
                self.key()
            )));
        }
        Ok(self)
    }

    /// The current container holds exactly `expected` entries.
    pub fn assert_count(self, expected: usize) -> WalkResult<Self> {
        let actual = match self.data() {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        };
        if actual != expected {
            return Err(WalkError::AssertionFailed(format!(
                "element count in node \"{}\" is {actual}, expected {expected}",
                self.key()
            )));
        }
        Ok(self)
    }
}
