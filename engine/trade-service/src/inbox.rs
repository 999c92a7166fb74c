//! The trade inbox

use crate::error::TradeError;
use crate::proposal::{Direction, ProposalId, ProposalStatus, TradeProposal};
use crate::Result;
use tracing::info;

/// Owned collection of trade proposals, in submission order.
#[derive(Debug, Default)]
pub struct TradeInbox {
    proposals: Vec<TradeProposal>,
}

impl TradeInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// The next free proposal id.
    pub fn next_id(&self) -> ProposalId {
        ProposalId(self.proposals.iter().map(|p| p.id.0).max().unwrap_or(0) + 1)
    }

    /// File a proposal after validating the offer.
    pub fn submit(&mut self, proposal: TradeProposal) -> Result<ProposalId> {
        proposal.validate()?;
        if self.proposals.iter().any(|p| p.id == proposal.id) {
            return Err(TradeError::DuplicateProposal { id: proposal.id });
        }
        let id = proposal.id;
        info!(
            "Trade proposal {} filed: {} -> {} ({})",
            id, proposal.from_user, proposal.to_user, proposal.league_id
        );
        self.proposals.push(proposal);
        Ok(id)
    }

    pub fn proposal(&self, id: ProposalId) -> Result<&TradeProposal> {
        self.proposals.iter().find(|p| p.id == id).ok_or(TradeError::ProposalNotFound { id })
    }

    /// Accept a pending incoming proposal.
    pub fn accept(&mut self, id: ProposalId) -> Result<&TradeProposal> {
        let proposal = self.pending_incoming_mut(id)?;
        proposal.status = ProposalStatus::Accepted;
        info!("Trade proposal {} accepted", id);
        Ok(&*proposal)
    }

    /// Reject a pending incoming proposal.
    pub fn reject(&mut self, id: ProposalId) -> Result<&TradeProposal> {
        let proposal = self.pending_incoming_mut(id)?;
        proposal.status = ProposalStatus::Rejected;
        info!("Trade proposal {} rejected", id);
        Ok(&*proposal)
    }

    /// Withdraw a pending outgoing proposal. The proposal leaves the inbox.
    pub fn cancel(&mut self, id: ProposalId) -> Result<TradeProposal> {
        let index = self
            .proposals
            .iter()
            .position(|p| p.id == id)
            .ok_or(TradeError::ProposalNotFound { id })?;
        let proposal = &self.proposals[index];
        if proposal.direction != Direction::Outgoing {
            return Err(TradeError::NotOutgoing { id });
        }
        if !proposal.is_pending() {
            return Err(TradeError::NotPending { id, status: proposal.status });
        }
        let proposal = self.proposals.remove(index);
        info!("Trade proposal {} withdrawn", id);
        Ok(proposal)
    }

    pub fn proposals(&self) -> &[TradeProposal] {
        &self.proposals
    }

    pub fn by_league(&self, league_id: &str) -> Vec<&TradeProposal> {
        self.proposals.iter().filter(|p| p.league_id == league_id).collect()
    }

    pub fn incoming(&self) -> Vec<&TradeProposal> {
        self.by_direction(Direction::Incoming)
    }

    pub fn outgoing(&self) -> Vec<&TradeProposal> {
        self.by_direction(Direction::Outgoing)
    }

    pub fn pending_incoming(&self) -> Vec<&TradeProposal> {
        self.proposals.iter().filter(|p| p.is_pending_incoming()).collect()
    }

    pub fn pending_count_by_league(&self, league_id: &str) -> usize {
        self.proposals
            .iter()
            .filter(|p| p.league_id == league_id && p.is_pending_incoming())
            .count()
    }

    pub fn total_pending_count(&self) -> usize {
        self.proposals.iter().filter(|p| p.is_pending_incoming()).count()
    }

    /// League ids with pending incoming proposals, first-seen order.
    pub fn leagues_with_pending(&self) -> Vec<String> {
        let mut leagues: Vec<String> = Vec::new();
        for proposal in self.proposals.iter().filter(|p| p.is_pending_incoming()) {
            if !leagues.contains(&proposal.league_id) {
                leagues.push(proposal.league_id.clone());
            }
        }
        leagues
    }

    fn by_direction(&self, direction: Direction) -> Vec<&TradeProposal> {
        self.proposals.iter().filter(|p| p.direction == direction).collect()
    }

    fn pending_incoming_mut(&mut self, id: ProposalId) -> Result<&mut TradeProposal> {
        let proposal = self
            .proposals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(TradeError::ProposalNotFound { id })?;
        if proposal.direction != Direction::Incoming {
            return Err(TradeError::NotIncoming { id });
        }
        if !proposal.is_pending() {
            return Err(TradeError::NotPending { id, status: proposal.status });
        }
        Ok(proposal)
    }
}
