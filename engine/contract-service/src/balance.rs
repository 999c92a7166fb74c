//! Credit balance
//!
//! Whole-credit accounting for one user. Debits are checked; credits
//! saturate rather than wrap.

use crate::error::ContractError;
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBalance {
    available: u64,
}

impl CreditBalance {
    pub fn new(initial: u64) -> Self {
        Self { available: initial }
    }

    pub fn available(&self) -> u64 {
        self.available
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        self.available >= amount
    }

    /// Take `amount` from the balance, or report the shortfall.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        if !self.can_afford(amount) {
            return Err(ContractError::InsufficientFunds {
                required: amount,
                available: self.available,
            });
        }
        self.available -= amount;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) {
        self.available = self.available.saturating_add(amount);
    }
}

impl Default for CreditBalance {
    fn default() -> Self {
        Self::new(0)
    }
}
