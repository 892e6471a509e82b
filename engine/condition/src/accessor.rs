//! The accessor module contains the logic to extract the customer attribute a
//! condition compares against.

use promo_common_api::CustomerContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The gender category derived from the customer title.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    /// Derives the category from a title id: title 1 is the male salutation, every
    /// other title maps to woman.
    ///
    /// Unknown title ids fall back to woman as well. This mirrors the historical
    /// behaviour of the back office and is relied upon by existing coupon rules.
    pub fn from_title_id(title_id: u64) -> Gender {
        if title_id == 1 {
            Gender::Man
        } else {
            Gender::Woman
        }
    }

    /// Parses a category submitted by the back office form.
    pub fn from_input(input: &str) -> Option<Gender> {
        match input {
            "man" => Some(Gender::Man),
            "woman" => Some(Gender::Woman),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "man",
            Gender::Woman => "woman",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extracts the attribute of the current customer that a condition evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerAccessor {
    /// The gender category derived from the customer title.
    GenderCategory,
    /// The raw customer title id.
    TitleId,
}

impl CustomerAccessor {
    pub fn get(&self, customer: &dyn CustomerContext) -> Value {
        match self {
            CustomerAccessor::GenderCategory => {
                Value::String(Gender::from_title_id(customer.title_id()).as_str().to_owned())
            }
            CustomerAccessor::TitleId => Value::Number(customer.title_id().into()),
        }
    }
}
