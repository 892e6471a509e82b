//! Allow filtering a coupon by the raw customer title.
//!
//! Unlike the gender condition, no category is derived: the customer title id is
//! compared directly to the id the administrator entered in the back office.

use crate::accessor::CustomerAccessor;
use crate::condition::{ConditionBuilder, ConditionLabels};
use crate::operator::ComparisonOperator;
use crate::validator::ValueDomain;

/// Service id the rule engine discovers this condition under.
pub const SERVICE_ID: &str = "promo.condition.match_for_title";

/// Condition first parameter: title
pub const INPUT_TITLE: &str = "title";

/// Returns the builder of the title condition.
pub fn match_for_title() -> ConditionBuilder {
    ConditionBuilder::new(
        SERVICE_ID,
        INPUT_TITLE,
        &[ComparisonOperator::Equal],
        CustomerAccessor::TitleId,
        ValueDomain::PositiveInteger,
        ConditionLabels {
            name: "By Customer title",
            tooltip: "If customer has the given title",
            summary: "If customer title is <strong>%title%</strong>",
            summary_placeholder: "%title%",
        },
    )
}
