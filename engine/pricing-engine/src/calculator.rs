//! Price calculation from view signals
//!
//! The calculator turns raw view counts into contract prices in three steps:
//! trend adjustment from the week-over-week ratio, rarity adjustment from the
//! 30-day view count, then the tier multiplier. Each stage rounds to whole
//! credits with half-up rounding, so the tier multiplier always applies to an
//! integer adjusted base.

use crate::config::PricingConfig;
use crate::error::PricingError;
use crate::models::PriceQuote;
use crate::tier::ContractTier;
use crate::Result;
use article_registry::Article;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

pub struct PriceCalculator {
    config: PricingConfig,
}

impl PriceCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Views last week over views the week before.
    ///
    /// A silent previous week yields a neutral ratio of 1 rather than a
    /// division error, so newly tracked articles price at their base.
    pub fn trend_ratio(&self, views_last_7d: u64, views_prev_7d: u64) -> Decimal {
        if views_prev_7d == 0 {
            return Decimal::ONE;
        }
        Decimal::from(views_last_7d) / Decimal::from(views_prev_7d)
    }

    /// Multiplier for the trend stage. Thresholds are strict: a ratio of
    /// exactly 1.2 or 0.8 stays neutral.
    pub fn trend_multiplier(&self, trend_ratio: Decimal) -> Decimal {
        if trend_ratio > self.config.upturn_threshold {
            self.config.upturn_multiplier
        } else if trend_ratio < self.config.downturn_threshold {
            self.config.downturn_multiplier
        } else {
            Decimal::ONE
        }
    }

    /// Multiplier for the rarity stage. Articles below the 30-day view floor
    /// are discounted as niche picks.
    pub fn rarity_multiplier(&self, views_30d: u64) -> Decimal {
        if views_30d < self.config.rarity_views_floor {
            self.config.rarity_multiplier
        } else {
            Decimal::ONE
        }
    }

    /// Price an article from its raw view signals.
    pub fn quote_signals(
        &self,
        base_price: u64,
        views_last_7d: u64,
        views_prev_7d: u64,
        views_30d: u64,
        tier: ContractTier,
    ) -> Result<PriceQuote> {
        if base_price == 0 {
            return Err(PricingError::InvalidBasePrice { price: base_price });
        }

        let trend_ratio = self.trend_ratio(views_last_7d, views_prev_7d);
        let trend_multiplier = self.trend_multiplier(trend_ratio);
        let rarity_multiplier = self.rarity_multiplier(views_30d);

        let adjusted_base =
            round_credits(Decimal::from(base_price) * trend_multiplier * rarity_multiplier);
        let final_price = round_credits(Decimal::from(adjusted_base) * tier.multiplier());

        Ok(PriceQuote {
            tier,
            trend_ratio,
            trend_multiplier,
            rarity_multiplier,
            adjusted_base,
            final_price,
        })
    }

    /// Price an article for one contract tier.
    pub fn quote(&self, article: &Article, tier: ContractTier) -> Result<PriceQuote> {
        let quote = self.quote_signals(
            article.base_price,
            article.views_last_7d,
            article.views_prev_7d,
            article.views_30d,
            tier,
        )?;

        debug!(
            "Quoted '{}' at {} credits ({} tier, trend {}, rarity {})",
            article.title, quote.final_price, tier, quote.trend_multiplier, quote.rarity_multiplier
        );

        Ok(quote)
    }

    /// Price an article across every tier, ordered by duration.
    pub fn tier_sheet(&self, article: &Article) -> Result<Vec<PriceQuote>> {
        ContractTier::ALL.into_iter().map(|tier| self.quote(article, tier)).collect()
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

/// Round to whole credits, half away from zero.
fn round_credits(amount: Decimal) -> u64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}
