//! Trade Service
//!
//! The trade-proposal inbox. Proposals are owned rows, not ambient state:
//! submitting validates the offer, accepting and rejecting act only on
//! pending incoming proposals, and cancelling withdraws a pending outgoing
//! proposal entirely. Queries slice the inbox by league and direction.

pub mod error;
pub mod inbox;
pub mod proposal;

pub use error::TradeError;
pub use inbox::TradeInbox;
pub use proposal::{Direction, ProposalArticle, ProposalId, ProposalStatus, TradeProposal};

pub type Result<T> = std::result::Result<T, TradeError>;
