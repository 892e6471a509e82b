//! The config module contains the *struct* definitions required for configuring a
//! condition from the back office and the mapping to serialize/deserialize them
//! to/from json format.

use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A condition as submitted by the back office: the service id of the condition type
/// plus the raw operator and value strings, keyed by input name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConditionConfig {
    pub condition: String,
    #[serde(default)]
    pub operators: HashMap<String, String>,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl ConditionConfig {
    pub fn from_json(json: &str) -> Result<ConditionConfig, ConditionError> {
        serde_json::from_str(json).map_err(|e| ConditionError::JsonDeserializationError {
            message: format!("Cannot deserialize ConditionConfig. Error [{}]", e),
        })
    }
}
