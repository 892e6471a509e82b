//! The `promo_common_api` crate contains the platform API types shared by the promo
//! engine crates.

pub mod i18n;
pub mod ordering;

use serde::{Deserialize, Serialize};

/// A Customer of the shop, as exposed to the rule engine by the platform facade.
/// Conditions never mutate it; they only read the attributes they compare against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: u64,
    /// Coded salutation of the customer (1 Mr, 2 Mrs, 3 Miss).
    pub title_id: u64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

impl Customer {
    pub fn new(id: u64, title_id: u64) -> Customer {
        Customer { id, title_id, ..Default::default() }
    }
}

/// The customer attributes readable during a rule evaluation.
///
/// The platform facade implements this trait for whatever customer representation
/// it carries; [`Customer`] implements it directly for in-process use and tests.
pub trait CustomerContext: Send + Sync {
    /// Returns the coded salutation of the current customer.
    fn title_id(&self) -> u64;
}

impl CustomerContext for Customer {
    fn title_id(&self) -> u64 {
        self.title_id
    }
}
