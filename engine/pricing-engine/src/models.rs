//! Quote model produced by the price calculator

use crate::tier::ContractTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully-resolved price for one article at one contract tier.
///
/// Carries the intermediate signals alongside the final price so callers can
/// surface how the quote was derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub tier: ContractTier,
    /// Views last week divided by views the week before
    pub trend_ratio: Decimal,
    pub trend_multiplier: Decimal,
    pub rarity_multiplier: Decimal,
    /// Base price after trend and rarity adjustments, rounded to whole credits
    pub adjusted_base: u64,
    /// Adjusted base scaled by the tier multiplier, rounded to whole credits
    pub final_price: u64,
}

impl PriceQuote {
    /// Week-over-week view change as a percentage, rounded to one decimal
    pub fn weekly_change_percent(&self) -> Decimal {
        ((self.trend_ratio - Decimal::ONE) * Decimal::new(100, 0)).round_dp(1)
    }

    pub fn affordable_with(&self, balance: u64) -> bool {
        balance >= self.final_price
    }

    /// Credits missing from `balance` to cover this quote; zero when affordable
    pub fn deficit_against(&self, balance: u64) -> u64 {
        self.final_price.saturating_sub(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_quote(final_price: u64) -> PriceQuote {
        PriceQuote {
            tier: ContractTier::Medium,
            trend_ratio: Decimal::new(125, 2),
            trend_multiplier: Decimal::new(115, 2),
            rarity_multiplier: Decimal::ONE,
            adjusted_base: final_price,
            final_price,
        }
    }

    #[test]
    fn test_weekly_change_percent_rounds_to_one_decimal() {
        let quote = create_test_quote(173);
        assert_eq!(quote.weekly_change_percent(), Decimal::new(250, 1)); // +25.0%
    }

    #[test]
    fn test_affordable_and_deficit() {
        let quote = create_test_quote(173);
        assert!(quote.affordable_with(173));
        assert!(!quote.affordable_with(172));
        assert_eq!(quote.deficit_against(172), 1);
        assert_eq!(quote.deficit_against(550), 0);
    }

    #[test]
    fn test_deficit_saturates_at_zero() {
        let quote = create_test_quote(100);
        assert_eq!(quote.deficit_against(u64::MAX), 0);
    }
}
