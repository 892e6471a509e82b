//! The condition module contains the conditions a coupon can carry and the logic to
//! validate and evaluate them against the current customer.
//!
//! A condition exists in two forms. The [`ConditionBuilder`] describes an
//! unconfigured condition type: its service id, its single admin input and the
//! operators and values that input accepts. Building it validates the submitted
//! operator/value pair and produces a [`MatchCondition`], the configured form that
//! the rule engine evaluates. An unconfigured condition cannot be evaluated; the
//! configured form is immutable and reusable across evaluations.

pub mod gender;
pub mod title;

use crate::accessor::CustomerAccessor;
use crate::error::ConditionError;
use crate::operator::ComparisonOperator;
use crate::validator::ValueDomain;
use log::*;
use promo_common_api::i18n::Translator;
use promo_common_api::CustomerContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The translation domain of every condition label.
pub const TRANSLATION_DOMAIN: &str = "condition";

/// Descriptor of one admin-configurable input of a condition, ready to be drawn by
/// the back office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionInput {
    pub available_operators: Vec<ComparisonOperator>,
    pub value: String,
    pub selected_operator: String,
}

/// The translation keys of the human readable labels of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionLabels {
    pub name: &'static str,
    pub tooltip: &'static str,
    pub summary: &'static str,
    /// Placeholder replaced with the configured value inside the summary key.
    pub summary_placeholder: &'static str,
}

/// The definition of a condition type, before an administrator configured it.
pub struct ConditionBuilder {
    service_id: &'static str,
    input_name: &'static str,
    available_operators: &'static [ComparisonOperator],
    accessor: CustomerAccessor,
    domain: ValueDomain,
    labels: ConditionLabels,
}

impl ConditionBuilder {
    pub fn new(
        service_id: &'static str,
        input_name: &'static str,
        available_operators: &'static [ComparisonOperator],
        accessor: CustomerAccessor,
        domain: ValueDomain,
        labels: ConditionLabels,
    ) -> ConditionBuilder {
        ConditionBuilder { service_id, input_name, available_operators, accessor, domain, labels }
    }

    /// Returns the service id the rule engine discovers this condition under.
    pub fn service_id(&self) -> &'static str {
        self.service_id
    }

    /// Returns the name of the single admin input of this condition.
    pub fn input_name(&self) -> &'static str {
        self.input_name
    }

    /// Returns the operators an administrator can select for this condition.
    pub fn available_operators(&self) -> &'static [ComparisonOperator] {
        self.available_operators
    }

    /// Returns the i18n name of the condition.
    pub fn name(&self, translator: &dyn Translator) -> String {
        translator.translate(self.labels.name, &HashMap::new(), TRANSLATION_DOMAIN)
    }

    /// Returns the i18n tooltip explaining in detail what the condition checks.
    pub fn tooltip(&self, translator: &dyn Translator) -> String {
        translator.translate(self.labels.tooltip, &HashMap::new(), TRANSLATION_DOMAIN)
    }

    /// Checks the relevancy of the operator and value chosen by the administrator and
    /// stores them into a configured [`MatchCondition`].
    ///
    /// Building again replaces the previously configured condition; building twice
    /// from the same input yields equal conditions.
    pub fn build(
        &self,
        operator: ComparisonOperator,
        value: &str,
    ) -> Result<MatchCondition, ConditionError> {
        debug!(
            "ConditionBuilder - build condition [{}] with operator [{}] and value [{}]",
            self.service_id, operator, value
        );

        if !self.available_operators.contains(&operator) {
            return Err(ConditionError::InvalidConditionOperatorError {
                condition: self.service_id.to_owned(),
                input: self.input_name.to_owned(),
                operator: operator.symbol().to_owned(),
            });
        }

        let value = self.domain.validate(self.service_id, self.input_name, value)?;

        Ok(MatchCondition {
            service_id: self.service_id,
            input_name: self.input_name,
            operator,
            value,
            accessor: self.accessor,
            labels: self.labels,
        })
    }

    /// Builds the condition from the raw operator and value strings the administrator
    /// submitted through the back office form, keyed by input name.
    pub fn build_from_form(
        &self,
        operators: &HashMap<String, String>,
        values: &HashMap<String, String>,
    ) -> Result<MatchCondition, ConditionError> {
        let operator = operators.get(self.input_name).ok_or_else(|| {
            ConditionError::MissingConditionInputError {
                condition: self.service_id.to_owned(),
                input: self.input_name.to_owned(),
            }
        })?;
        let operator = ComparisonOperator::from_symbol(operator).ok_or_else(|| {
            ConditionError::InvalidConditionOperatorError {
                condition: self.service_id.to_owned(),
                input: self.input_name.to_owned(),
                operator: operator.clone(),
            }
        })?;

        let value = values.get(self.input_name).ok_or_else(|| {
            ConditionError::MissingConditionInputError {
                condition: self.service_id.to_owned(),
                input: self.input_name.to_owned(),
            }
        })?;

        self.build(operator, value)
    }

    /// Generates the descriptors of the inputs to be drawn in the back office,
    /// reflecting the currently configured condition if any.
    pub fn generate_inputs(
        &self,
        current: Option<&MatchCondition>,
    ) -> HashMap<String, ConditionInput> {
        let (selected_operator, value) = match current {
            Some(condition) => {
                (condition.operator.symbol().to_owned(), display_value(&condition.value))
            }
            None => (String::new(), String::new()),
        };

        let mut inputs = HashMap::new();
        inputs.insert(
            self.input_name.to_owned(),
            ConditionInput {
                available_operators: self.available_operators.to_vec(),
                value,
                selected_operator,
            },
        );
        inputs
    }
}

/// A condition with its operator and value validated and stored, ready to be matched
/// against the current customer.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCondition {
    service_id: &'static str,
    input_name: &'static str,
    operator: ComparisonOperator,
    value: Value,
    accessor: CustomerAccessor,
    labels: ConditionLabels,
}

impl MatchCondition {
    pub fn service_id(&self) -> &'static str {
        self.service_id
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns whether the current customer meets the condition.
    pub fn is_matching(&self, customer: &dyn CustomerContext) -> bool {
        let attribute = self.accessor.get(customer);
        let matched = self.operator.apply(&attribute, &self.value);

        trace!(
            "MatchCondition - condition [{}]: [{:?}] {} [{:?}] -> [{}]",
            self.service_id,
            attribute,
            self.operator,
            self.value,
            matched
        );

        matched
    }

    /// Returns the i18n summary briefly explaining the condition with its
    /// configured value.
    pub fn summary(&self, translator: &dyn Translator) -> String {
        let mut substitutions = HashMap::new();
        substitutions
            .insert(self.labels.summary_placeholder.to_owned(), display_value(&self.value));
        translator.translate(self.labels.summary, &substitutions, TRANSLATION_DOMAIN)
    }
}

/// Renders a stored value the way the back office displays it.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use maplit::hashmap;
    use promo_common_api::Customer;
    use serde_json::json;

    fn test_builder() -> ConditionBuilder {
        ConditionBuilder::new(
            "promo.condition.test",
            "gender",
            &[ComparisonOperator::Equal],
            CustomerAccessor::GenderCategory,
            ValueDomain::GenderCategory,
            ConditionLabels {
                name: "Test condition",
                tooltip: "A condition for tests",
                summary: "Matches <strong>%gender%</strong>",
                summary_placeholder: "%gender%",
            },
        )
    }

    #[test]
    fn build_should_fail_if_the_operator_is_not_available() {
        let builder = test_builder();

        let result = builder.build(ComparisonOperator::Different, "man");

        assert_eq!(
            Err(ConditionError::InvalidConditionOperatorError {
                condition: "promo.condition.test".to_owned(),
                input: "gender".to_owned(),
                operator: "!=".to_owned(),
            }),
            result
        );
    }

    #[test]
    fn build_should_fail_with_an_unavailable_operator_whatever_the_value() {
        let builder = test_builder();

        for value in &["man", "woman", "other", ""] {
            assert!(matches!(
                builder.build(ComparisonOperator::Superior, value),
                Err(ConditionError::InvalidConditionOperatorError { .. })
            ));
        }
    }

    #[test]
    fn build_should_fail_if_the_value_is_outside_the_domain() {
        let builder = test_builder();

        let result = builder.build(ComparisonOperator::Equal, "other");

        assert_eq!(
            Err(ConditionError::InvalidConditionValueError {
                condition: "promo.condition.test".to_owned(),
                input: "gender".to_owned(),
                value: "other".to_owned(),
            }),
            result
        );
    }

    #[test]
    fn build_should_store_the_operator_and_the_canonical_value() {
        let builder = test_builder();

        let condition = builder.build(ComparisonOperator::Equal, "man").unwrap();

        assert_eq!("promo.condition.test", condition.service_id());
        assert_eq!(ComparisonOperator::Equal, condition.operator());
        assert_eq!(&json!("man"), condition.value());
    }

    #[test]
    fn building_twice_from_the_same_input_should_yield_equal_conditions() {
        let builder = test_builder();

        let first = builder.build(ComparisonOperator::Equal, "man").unwrap();
        let second = builder.build(ComparisonOperator::Equal, "man").unwrap();

        assert_eq!(first, second);

        let customer = Customer::new(1, 1);
        assert_eq!(first.is_matching(&customer), second.is_matching(&customer));
    }

    #[test]
    fn build_from_form_should_extract_the_condition_input() {
        let builder = test_builder();

        let operators = hashmap![
            "gender".to_owned() => "==".to_owned(),
        ];
        let values = hashmap![
            "gender".to_owned() => "woman".to_owned(),
        ];

        let condition = builder.build_from_form(&operators, &values).unwrap();

        assert_eq!(ComparisonOperator::Equal, condition.operator());
        assert_eq!(&json!("woman"), condition.value());
    }

    #[test]
    fn build_from_form_should_fail_if_the_operator_entry_is_missing() {
        let builder = test_builder();

        let values = hashmap![
            "gender".to_owned() => "woman".to_owned(),
        ];

        let result = builder.build_from_form(&HashMap::new(), &values);

        assert_eq!(
            Err(ConditionError::MissingConditionInputError {
                condition: "promo.condition.test".to_owned(),
                input: "gender".to_owned(),
            }),
            result
        );
    }

    #[test]
    fn build_from_form_should_fail_if_the_value_entry_is_missing() {
        let builder = test_builder();

        let operators = hashmap![
            "gender".to_owned() => "==".to_owned(),
        ];

        let result = builder.build_from_form(&operators, &HashMap::new());

        assert!(matches!(result, Err(ConditionError::MissingConditionInputError { .. })));
    }

    #[test]
    fn build_from_form_should_fail_if_the_operator_symbol_is_unknown() {
        let builder = test_builder();

        let operators = hashmap![
            "gender".to_owned() => "equals".to_owned(),
        ];
        let values = hashmap![
            "gender".to_owned() => "woman".to_owned(),
        ];

        let result = builder.build_from_form(&operators, &values);

        assert_eq!(
            Err(ConditionError::InvalidConditionOperatorError {
                condition: "promo.condition.test".to_owned(),
                input: "gender".to_owned(),
                operator: "equals".to_owned(),
            }),
            result
        );
    }

    #[test]
    fn generate_inputs_should_describe_an_unconfigured_condition() {
        let builder = test_builder();

        let inputs = builder.generate_inputs(None);

        assert_eq!(1, inputs.len());
        let input = &inputs["gender"];
        assert_eq!(vec![ComparisonOperator::Equal], input.available_operators);
        assert_eq!("", input.value);
        assert_eq!("", input.selected_operator);
    }

    #[test]
    fn generate_inputs_should_reflect_the_configured_condition() {
        let builder = test_builder();
        let condition = builder.build(ComparisonOperator::Equal, "man").unwrap();

        let inputs = builder.generate_inputs(Some(&condition));

        let input = &inputs["gender"];
        assert_eq!("man", input.value);
        assert_eq!("==", input.selected_operator);
    }

    #[test]
    fn summary_should_substitute_the_configured_value() {
        let builder = test_builder();
        let condition = builder.build(ComparisonOperator::Equal, "man").unwrap();

        let summary = condition.summary(&promo_common_api::i18n::DefaultTranslator);

        assert_eq!("Matches <strong>man</strong>", summary);
    }
}
