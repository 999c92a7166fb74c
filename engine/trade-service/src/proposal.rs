//! Trade proposal records

use crate::error::TradeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProposalId(pub u64);

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ProposalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The article side of an offer: a title and its listed base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalArticle {
    pub title: String,
    pub base_price: u64,
}

/// One trade proposal between two teams in a league.
///
/// A proposal must offer something: an article, credits, or both. The
/// requested article is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeProposal {
    pub id: ProposalId,
    pub league_id: String,
    pub direction: Direction,
    pub status: ProposalStatus,
    pub from_user: String,
    pub from_team: String,
    pub to_user: String,
    pub to_team: String,
    pub offered_article: Option<ProposalArticle>,
    pub offered_credits: Option<u64>,
    pub requested_article: ProposalArticle,
    /// Tier label quoted in the offer, as the counterparty phrased it
    pub tier_label: String,
    pub created_at: DateTime<Utc>,
}

impl TradeProposal {
    pub fn validate(&self) -> Result<(), TradeError> {
        let offers_credits = self.offered_credits.is_some_and(|c| c > 0);
        if self.offered_article.is_none() && !offers_credits {
            return Err(TradeError::OffersNothing { id: self.id });
        }
        Ok(())
    }

    pub fn is_pending(&self) -> bool {
        self.status == ProposalStatus::Pending
    }

    pub fn is_pending_incoming(&self) -> bool {
        self.is_pending() && self.direction == Direction::Incoming
    }

    /// Age rendered the way the inbox shows it: "Just now" under an hour,
    /// whole hours under a day, whole days after.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let hours = (now - self.created_at).num_hours();
        if hours < 1 {
            "Just now".to_string()
        } else if hours < 24 {
            format!("{}h ago", hours)
        } else {
            format!("{}d ago", hours / 24)
        }
    }
}
