//! Pricing engine configuration
//!
//! Thresholds and multipliers for the trend/rarity adjustments. Defaults are
//! the canonical market parameters; each field can be overridden through
//! `FANTASYWIKI_*` environment variables.

use crate::error::PricingError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Week-over-week view ratio above which an article is trending up
    pub upturn_threshold: Decimal,
    /// Week-over-week view ratio below which an article is trending down
    pub downturn_threshold: Decimal,
    /// Price multiplier for articles trending up
    pub upturn_multiplier: Decimal,
    /// Price multiplier for articles trending down
    pub downturn_multiplier: Decimal,
    /// 30-day view count under which an article counts as niche
    pub rarity_views_floor: u64,
    /// Price multiplier for niche articles
    pub rarity_multiplier: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            upturn_threshold: Decimal::new(12, 1),    // 1.2
            downturn_threshold: Decimal::new(8, 1),   // 0.8
            upturn_multiplier: Decimal::new(115, 2),  // 1.15
            downturn_multiplier: Decimal::new(85, 2), // 0.85
            rarity_views_floor: 1000,
            rarity_multiplier: Decimal::new(7, 1), // 0.7
        }
    }
}

impl PricingConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            upturn_threshold: std::env::var("FANTASYWIKI_UPTURN_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upturn_threshold),
            downturn_threshold: std::env::var("FANTASYWIKI_DOWNTURN_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.downturn_threshold),
            upturn_multiplier: std::env::var("FANTASYWIKI_UPTURN_MULTIPLIER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upturn_multiplier),
            downturn_multiplier: std::env::var("FANTASYWIKI_DOWNTURN_MULTIPLIER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.downturn_multiplier),
            rarity_views_floor: std::env::var("FANTASYWIKI_RARITY_VIEWS_FLOOR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rarity_views_floor),
            rarity_multiplier: std::env::var("FANTASYWIKI_RARITY_MULTIPLIER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rarity_multiplier),
        }
    }

    /// Validate invariants between thresholds and multipliers
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.downturn_threshold >= self.upturn_threshold {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "downturn_threshold ({}) must be below upturn_threshold ({})",
                    self.downturn_threshold, self.upturn_threshold
                ),
            });
        }

        if self.upturn_multiplier <= Decimal::ZERO
            || self.downturn_multiplier <= Decimal::ZERO
            || self.rarity_multiplier <= Decimal::ZERO
        {
            return Err(PricingError::InvalidConfig {
                message: "price multipliers must be positive".to_string(),
            });
        }

        if self.downturn_multiplier > self.upturn_multiplier {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "downturn_multiplier ({}) must not exceed upturn_multiplier ({})",
                    self.downturn_multiplier, self.upturn_multiplier
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.upturn_threshold, Decimal::new(12, 1));
        assert_eq!(config.rarity_views_floor, 1000);
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let config = PricingConfig {
            upturn_threshold: Decimal::new(8, 1),
            downturn_threshold: Decimal::new(12, 1),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PricingError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_multiplier() {
        let config = PricingConfig { rarity_multiplier: Decimal::ZERO, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_multipliers() {
        let config = PricingConfig {
            upturn_multiplier: Decimal::new(85, 2),
            downturn_multiplier: Decimal::new(115, 2),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        // No FANTASYWIKI_* variables set in the test environment
        let config = PricingConfig::from_env();
        assert_eq!(config.upturn_multiplier, Decimal::new(115, 2));
        assert_eq!(config.downturn_multiplier, Decimal::new(85, 2));
    }
}
