//! Allow filtering a coupon by the customer gender (man or woman).
//!
//! The customer title is mapped to a gender category and compared to the category
//! the administrator selected in the back office.

use crate::accessor::{CustomerAccessor, Gender};
use crate::condition::{ConditionBuilder, ConditionLabels, MatchCondition, TRANSLATION_DOMAIN};
use crate::operator::ComparisonOperator;
use crate::validator::ValueDomain;
use promo_common_api::i18n::Translator;
use serde_json::Value;
use std::collections::HashMap;

/// Service id the rule engine discovers this condition under.
pub const SERVICE_ID: &str = "promo.condition.match_for_gender";

/// Condition first parameter: gender
pub const INPUT_GENDER: &str = "gender";

/// Returns the builder of the gender condition.
pub fn match_for_gender() -> ConditionBuilder {
    ConditionBuilder::new(
        SERVICE_ID,
        INPUT_GENDER,
        &[ComparisonOperator::Equal],
        CustomerAccessor::GenderCategory,
        ValueDomain::GenderCategory,
        ConditionLabels {
            name: "By Customer gender",
            tooltip: "If customer is a man or a woman",
            summary: "If customer <strong>is a %gender%</strong>",
            summary_placeholder: "%gender%",
        },
    )
}

/// Draws the input displayed in the back office allowing the administrator to set
/// the coupon condition.
///
/// The markup is kept identical to the historical back office fragment: a hidden
/// operator input fixed to `==` and one radio button per gender category, with the
/// `checked` attribute reflecting the currently stored value.
pub fn draw_back_office_inputs(
    translator: &dyn Translator,
    current: Option<&MatchCondition>,
) -> String {
    let label_only_for_men = translator.translate(
        "Available only if a Customer is a man",
        &HashMap::new(),
        TRANSLATION_DOMAIN,
    );
    let label_only_for_women = translator.translate(
        "Available only if a Customer is a woman",
        &HashMap::new(),
        TRANSLATION_DOMAIN,
    );

    let (checked_man, checked_woman) = match current.map(MatchCondition::value) {
        Some(Value::String(value)) if value == Gender::Woman.as_str() => ("", "checked"),
        Some(_) => ("checked", ""),
        None => ("", ""),
    };

    format!(
        r#"
                <div id="condition-add-operators-values" class="form-group col-md-6">
                    <input type="hidden" id="{input}-operator" name="{input}[operator]" value="==" />
                    <div class="row radio">
                        <div class="input-group col-lg-10">
                            <label>
                                <input type="radio" name="{input}[value]" value="{woman}" {checked_woman}>
                                {label_only_for_women}
                            </label>
                        </div>
                    </div>
                    <div class="row radio">
                        <div class="input-group col-lg-10">
                            <label>
                                <input type="radio" name="{input}[value]" value="{man}" {checked_man}>
                                {label_only_for_men}
                            </label>
                        </div>
                    </div>
                </div>
            "#,
        input = INPUT_GENDER,
        woman = Gender::Woman.as_str(),
        man = Gender::Man.as_str(),
        checked_woman = checked_woman,
        checked_man = checked_man,
        label_only_for_women = label_only_for_women,
        label_only_for_men = label_only_for_men,
    )
}
