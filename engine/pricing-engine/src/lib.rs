//! Pricing Engine
//!
//! Derives the credit cost of an article contract from market signals
//! (viewership trend, rarity) and the chosen contract tier. All arithmetic
//! is decimal with round-half-up semantics so that quoted prices are
//! reproducible to the credit.

pub mod calculator;
pub mod config;
pub mod error;
pub mod models;
pub mod tier;

pub use calculator::PriceCalculator;
pub use config::PricingConfig;
pub use error::PricingError;
pub use models::PriceQuote;
pub use tier::ContractTier;

// Result type alias
pub type Result<T> = std::result::Result<T, PricingError>;
