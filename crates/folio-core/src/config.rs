//! # Ledger Configuration
//!
//! Plain configuration data for the ledger and register. Loading it from the
//! environment or the command line is the application's job.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{DEFAULT_LOYALTY_DISCOUNT_BPS, DEFAULT_OPENING_CASH};

/// How intake candidates are checked before they reach the inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakePolicy {
    /// Accept every candidate as-is, including negative prices and empty titles.
    #[default]
    Permissive,

    /// Reject negative counts, negative prices and empty titles.
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerConfig {
    /// Cash in the register when the store opens.
    pub opening_cash: Money,

    /// Discount for loyalty customers in basis points (1000 = 10%).
    pub loyalty_discount_bps: u32,

    pub intake_policy: IntakePolicy,
}

impl Default for LedgerConfig {
    /// $1000.00 opening cash, 10% loyalty discount, permissive intake.
    fn default() -> Self {
        LedgerConfig {
            opening_cash: DEFAULT_OPENING_CASH,
            loyalty_discount_bps: DEFAULT_LOYALTY_DISCOUNT_BPS,
            intake_policy: IntakePolicy::Permissive,
        }
    }
}
