//! Trade service errors

use crate::proposal::{ProposalId, ProposalStatus};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error("No trade proposal {id}")]
    ProposalNotFound { id: ProposalId },

    #[error("Trade proposal {id} already exists")]
    DuplicateProposal { id: ProposalId },

    #[error("Trade proposal {id} offers neither an article nor credits")]
    OffersNothing { id: ProposalId },

    #[error("Trade proposal {id} is not incoming")]
    NotIncoming { id: ProposalId },

    #[error("Trade proposal {id} is not outgoing")]
    NotOutgoing { id: ProposalId },

    #[error("Trade proposal {id} is {status}, not pending")]
    NotPending { id: ProposalId, status: ProposalStatus },
}
