//! Owned article contracts

use article_registry::{days_until, ArticleRef};
use chrono::{DateTime, Duration, Utc};
use pricing_engine::ContractTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A time-boxed contract on one article.
///
/// The purchase price is fixed at signing; `current_value` moves with the
/// market, and the difference is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedContract {
    pub article: ArticleRef,
    pub tier: ContractTier,
    pub purchase_price: u64,
    pub current_value: u64,
    pub points: u32,
    pub signed_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl OwnedContract {
    /// Sign a fresh contract at `now`; it runs for the tier's duration.
    pub fn sign(article: ArticleRef, tier: ContractTier, price: u64, now: DateTime<Utc>) -> Self {
        Self {
            article,
            tier,
            purchase_price: price,
            current_value: price,
            points: 0,
            signed_at: now,
            ends_at: now + Duration::days(i64::from(tier.duration_days())),
        }
    }

    /// Value gained or lost since signing, in credits.
    pub fn value_change(&self) -> i64 {
        self.current_value as i64 - self.purchase_price as i64
    }

    /// Value change as a percentage of the purchase price, one decimal.
    pub fn value_change_percent(&self) -> Decimal {
        if self.purchase_price == 0 {
            return Decimal::ZERO;
        }
        let change = Decimal::from(self.current_value) - Decimal::from(self.purchase_price);
        (change / Decimal::from(self.purchase_price) * Decimal::new(100, 0)).round_dp(1)
    }

    /// Whole days until the contract ends, rounded up. Negative once past.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        days_until(self.ends_at, now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.ends_at
    }

    /// Push the end date out by one tier duration.
    pub fn extend(&mut self) {
        self.ends_at += Duration::days(i64::from(self.tier.duration_days()));
    }
}
