//! The operator module contains the comparison operators an administrator can choose
//! from when relating a configured value to a customer attribute.
//!
//! The operators below form the platform-wide registry; every condition input declares
//! the subset it accepts.

use promo_common_api::ordering::partial_cmp_values;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// A comparison operator relating a customer attribute to a configured value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    #[serde(rename = "<")]
    Inferior,
    #[serde(rename = "<=")]
    InferiorOrEqual,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = ">=")]
    SuperiorOrEqual,
    #[serde(rename = ">")]
    Superior,
    #[serde(rename = "!=")]
    Different,
}

impl ComparisonOperator {
    /// Returns the symbol the back office submits for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Inferior => "<",
            ComparisonOperator::InferiorOrEqual => "<=",
            ComparisonOperator::Equal => "==",
            ComparisonOperator::SuperiorOrEqual => ">=",
            ComparisonOperator::Superior => ">",
            ComparisonOperator::Different => "!=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<ComparisonOperator> {
        match symbol {
            "<" => Some(ComparisonOperator::Inferior),
            "<=" => Some(ComparisonOperator::InferiorOrEqual),
            "==" => Some(ComparisonOperator::Equal),
            ">=" => Some(ComparisonOperator::SuperiorOrEqual),
            ">" => Some(ComparisonOperator::Superior),
            "!=" => Some(ComparisonOperator::Different),
            _ => None,
        }
    }

    /// Applies the operator to the two values and returns whether the comparison holds.
    pub fn apply(&self, first: &Value, second: &Value) -> bool {
        let ordering = partial_cmp_values(first, second);
        match self {
            ComparisonOperator::Equal => first == second || ordering == Some(Ordering::Equal),
            ComparisonOperator::Different => {
                !(first == second || ordering == Some(Ordering::Equal))
            }
            ComparisonOperator::Inferior => ordering == Some(Ordering::Less),
            ComparisonOperator::InferiorOrEqual => {
                matches!(ordering, Some(Ordering::Less | Ordering::Equal))
            }
            ComparisonOperator::Superior => ordering == Some(Ordering::Greater),
            ComparisonOperator::SuperiorOrEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            }
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use serde_json::json;

    #[test]
    fn every_operator_symbol_should_round_trip() {
        let operators = [
            ComparisonOperator::Inferior,
            ComparisonOperator::InferiorOrEqual,
            ComparisonOperator::Equal,
            ComparisonOperator::SuperiorOrEqual,
            ComparisonOperator::Superior,
            ComparisonOperator::Different,
        ];

        for operator in &operators {
            assert_eq!(Some(*operator), ComparisonOperator::from_symbol(operator.symbol()));
        }
    }

    #[test]
    fn from_symbol_should_reject_an_unknown_symbol() {
        assert_eq!(None, ComparisonOperator::from_symbol("="));
        assert_eq!(None, ComparisonOperator::from_symbol("equals"));
        assert_eq!(None, ComparisonOperator::from_symbol(""));
    }

    #[test]
    fn should_serialize_to_the_symbol() {
        assert_eq!(r#""==""#, serde_json::to_string(&ComparisonOperator::Equal).unwrap());
        assert_eq!(r#""!=""#, serde_json::to_string(&ComparisonOperator::Different).unwrap());
    }

    #[test]
    fn equal_should_hold_for_identical_strings() {
        assert!(ComparisonOperator::Equal.apply(&json!("man"), &json!("man")));
        assert!(!ComparisonOperator::Equal.apply(&json!("man"), &json!("woman")));
    }

    #[test]
    fn equal_should_hold_for_numbers_with_different_representations() {
        assert!(ComparisonOperator::Equal.apply(&json!(2), &json!(2.0)));
    }

    #[test]
    fn equal_should_not_hold_across_types() {
        assert!(!ComparisonOperator::Equal.apply(&json!("2"), &json!(2)));
    }

    #[test]
    fn different_should_be_the_negation_of_equal() {
        assert!(ComparisonOperator::Different.apply(&json!(1), &json!(2)));
        assert!(!ComparisonOperator::Different.apply(&json!(2), &json!(2)));
    }

    #[test]
    fn ordering_operators_should_compare_numbers() {
        assert!(ComparisonOperator::Inferior.apply(&json!(1), &json!(2)));
        assert!(ComparisonOperator::InferiorOrEqual.apply(&json!(2), &json!(2)));
        assert!(ComparisonOperator::Superior.apply(&json!(3), &json!(2)));
        assert!(ComparisonOperator::SuperiorOrEqual.apply(&json!(2), &json!(2)));

        assert!(!ComparisonOperator::Inferior.apply(&json!(2), &json!(2)));
        assert!(!ComparisonOperator::Superior.apply(&json!(2), &json!(2)));
    }

    #[test]
    fn ordering_operators_should_not_hold_for_incomparable_values() {
        assert!(!ComparisonOperator::Inferior.apply(&json!("1"), &json!(2)));
        assert!(!ComparisonOperator::SuperiorOrEqual.apply(&json!("1"), &json!(2)));
    }
}
