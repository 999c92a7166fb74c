//! Contract tiers and their duration/multiplier table
//!
//! The canonical tier table: SHORT/MEDIUM/LONG/SEASON. Multipliers grow
//! monotonically with duration, and MEDIUM is the default offered to users.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractTier {
    Short,
    Medium,
    Long,
    Season,
}

impl ContractTier {
    /// All tiers, ordered by duration
    pub const ALL: [ContractTier; 4] =
        [ContractTier::Short, ContractTier::Medium, ContractTier::Long, ContractTier::Season];

    pub fn label(&self) -> &'static str {
        match self {
            ContractTier::Short => "Short",
            ContractTier::Medium => "Medium",
            ContractTier::Long => "Long",
            ContractTier::Season => "Season",
        }
    }

    /// Contract duration in days
    pub fn duration_days(&self) -> u32 {
        match self {
            ContractTier::Short => 3,
            ContractTier::Medium => 7,
            ContractTier::Long => 14,
            ContractTier::Season => 90,
        }
    }

    /// Price multiplier applied on top of the adjusted base price
    pub fn multiplier(&self) -> Decimal {
        match self {
            ContractTier::Short => Decimal::new(6, 1),   // 0.6
            ContractTier::Medium => Decimal::new(10, 1), // 1.0
            ContractTier::Long => Decimal::new(17, 1),   // 1.7
            ContractTier::Season => Decimal::new(45, 1), // 4.5
        }
    }

    /// Flat renewal cost in credits; season contracts renew for free
    pub fn renewal_cost(&self) -> u64 {
        match self {
            ContractTier::Short => 5,
            ContractTier::Medium => 10,
            ContractTier::Long => 15,
            ContractTier::Season => 0,
        }
    }

    /// The tier pre-selected in purchase flows
    pub fn is_default(&self) -> bool {
        matches!(self, ContractTier::Medium)
    }
}

impl Default for ContractTier {
    fn default() -> Self {
        ContractTier::Medium
    }
}

impl fmt::Display for ContractTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
