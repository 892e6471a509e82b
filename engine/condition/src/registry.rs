//! The registry module contains the condition types available to the rule engine,
//! keyed by service id.

use crate::condition::{gender, title, ConditionBuilder, MatchCondition};
use crate::config::ConditionConfig;
use crate::error::ConditionError;
use log::*;
use std::collections::HashMap;

/// Registry of the condition types the rule engine can configure and evaluate.
pub struct ConditionRegistry {
    conditions: HashMap<&'static str, ConditionBuilder>,
}

impl ConditionRegistry {
    /// Returns an empty registry.
    pub fn new() -> ConditionRegistry {
        ConditionRegistry { conditions: HashMap::new() }
    }

    /// Registers a condition type under its service id, replacing any previously
    /// registered condition with the same id.
    pub fn register(&mut self, builder: ConditionBuilder) {
        info!("ConditionRegistry - register condition [{}]", builder.service_id());
        self.conditions.insert(builder.service_id(), builder);
    }

    pub fn get(&self, service_id: &str) -> Result<&ConditionBuilder, ConditionError> {
        self.conditions.get(service_id).ok_or_else(|| ConditionError::UnknownConditionError {
            condition: service_id.to_owned(),
        })
    }

    pub fn service_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.conditions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Builds a configured condition from a submitted condition config.
    pub fn build_from_config(
        &self,
        config: &ConditionConfig,
    ) -> Result<MatchCondition, ConditionError> {
        debug!("ConditionRegistry - build condition from config [{}]", config.condition);
        let builder = self.get(&config.condition)?;
        builder.build_from_form(&config.operators, &config.values)
    }
}

/// Registry pre-populated with the condition types shipped by this crate.
impl Default for ConditionRegistry {
    fn default() -> ConditionRegistry {
        let mut registry = ConditionRegistry::new();
        registry.register(gender::match_for_gender());
        registry.register(title::match_for_title());
        registry
    }
}
