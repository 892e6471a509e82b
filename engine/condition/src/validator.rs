//! The validator module contains the domain checks applied to the values an
//! administrator assigns to a condition input.

use crate::accessor::Gender;
use crate::error::ConditionError;
use serde_json::Value;

/// The domain of values accepted by a condition input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    /// Exactly one of the gender categories.
    GenderCategory,
    /// A strictly positive integer.
    PositiveInteger,
}

impl ValueDomain {
    /// Validates a raw value submitted by the back office and returns it in
    /// canonical form.
    pub fn validate(
        &self,
        condition: &str,
        input: &str,
        raw: &str,
    ) -> Result<Value, ConditionError> {
        match self {
            ValueDomain::GenderCategory => match Gender::from_input(raw) {
                Some(gender) => Ok(Value::String(gender.as_str().to_owned())),
                None => Err(ConditionError::InvalidConditionValueError {
                    condition: condition.to_owned(),
                    input: input.to_owned(),
                    value: raw.to_owned(),
                }),
            },
            ValueDomain::PositiveInteger => match raw.trim().parse::<u64>() {
                Ok(number) if number > 0 => Ok(Value::Number(number.into())),
                _ => Err(ConditionError::InvalidConditionValueError {
                    condition: condition.to_owned(),
                    input: input.to_owned(),
                    value: raw.to_owned(),
                }),
            },
        }
    }
}
