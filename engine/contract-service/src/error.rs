//! Contract service errors

use article_registry::ArticleId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("Insufficient funds: need {required} credits, have {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("No contract for article {id}")]
    ContractNotFound { id: ArticleId },

    #[error("Article {id} is already under contract")]
    AlreadyOwned { id: ArticleId },

    #[error("Pricing failed: {0}")]
    Pricing(#[from] pricing_engine::PricingError),
}

impl ContractError {
    /// Credits missing when the error is an insufficient-funds rejection.
    pub fn deficit(&self) -> Option<u64> {
        match self {
            ContractError::InsufficientFunds { required, available } => {
                Some(required.saturating_sub(*available))
            }
            _ => None,
        }
    }
}
