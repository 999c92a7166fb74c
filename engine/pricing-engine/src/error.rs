//! Error types for the Pricing Engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid base price: {price} (must be positive)")]
    InvalidBasePrice { price: u64 },

    #[error("Invalid pricing config: {message}")]
    InvalidConfig { message: String },
}
