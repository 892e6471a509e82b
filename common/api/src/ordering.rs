//! The ordering module contains the scalar comparison used by the condition operators.

use num_cmp::NumCmp;
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Compares two json scalars.
///
/// Values of different types, and non scalar values, are incomparable and
/// return `None`.
pub fn partial_cmp_values(first: &Value, second: &Value) -> Option<Ordering> {
    match (first, second) {
        (Value::Number(first), Value::Number(second)) => partial_cmp_numbers(first, second),
        (Value::String(first), Value::String(second)) => first.partial_cmp(second),
        (Value::Bool(first), Value::Bool(second)) => first.partial_cmp(second),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

/// Compares two json numbers across their internal representations.
/// Same-representation pairs are compared exactly; mixed pairs go through `NumCmp`.
pub fn partial_cmp_numbers(first: &Number, second: &Number) -> Option<Ordering> {
    if let (Some(first), Some(second)) = (first.as_u64(), second.as_u64()) {
        Some(first.cmp(&second))
    } else if let (Some(first), Some(second)) = (first.as_i64(), second.as_i64()) {
        Some(first.cmp(&second))
    } else if let (Some(first), Some(second)) = (first.as_u64(), second.as_f64()) {
        NumCmp::num_cmp(first, second)
    } else if let (Some(first), Some(second)) = (first.as_f64(), second.as_u64()) {
        NumCmp::num_cmp(first, second)
    } else if let (Some(first), Some(second)) = (first.as_i64(), second.as_f64()) {
        NumCmp::num_cmp(first, second)
    } else if let (Some(first), Some(second)) = (first.as_f64(), second.as_i64()) {
        NumCmp::num_cmp(first, second)
    } else {
        NumCmp::num_cmp(first.as_f64()?, second.as_f64()?)
    }
}
