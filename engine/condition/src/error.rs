use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConditionError {
    #[error("InvalidConditionOperatorError: Operator [{operator}] is not allowed for input [{input}] of condition [{condition}]")]
    InvalidConditionOperatorError { condition: String, input: String, operator: String },

    #[error("InvalidConditionValueError: Value [{value}] is not valid for input [{input}] of condition [{condition}]")]
    InvalidConditionValueError { condition: String, input: String, value: String },

    #[error("MissingConditionInputError: The submitted form contains no entry for input [{input}] of condition [{condition}]")]
    MissingConditionInputError { condition: String, input: String },

    #[error("UnknownConditionError: Condition [{condition}] is not registered")]
    UnknownConditionError { condition: String },

    #[error("JsonDeserializationError: [{message}]")]
    JsonDeserializationError { message: String },
}
