//! Embedded session seeds
//!
//! The starting roster and the trade inbox ship inside the binary. Seed
//! dates are stored as day or hour counts relative to "now", so a session
//! started at any moment sees the same remaining durations and ages.

use anyhow::{Context, Result};
use article_registry::{ArticleId, ArticleRef};
use chrono::{DateTime, Duration, Utc};
use contract_service::OwnedContract;
use lineup_service::{Formation, Lineup, Role, TeamStore};
use pricing_engine::ContractTier;
use serde::Deserialize;
use trade_service::{
    Direction, ProposalArticle, ProposalId, ProposalStatus, TradeInbox, TradeProposal,
};
use tracing::info;

const TEAM_SEED: &str = include_str!("../data/team.json");
const PROPOSALS_SEED: &str = include_str!("../data/proposals.json");

#[derive(Debug, Deserialize)]
struct TeamDoc {
    articles: Vec<SeedArticle>,
}

#[derive(Debug, Deserialize)]
struct SeedArticle {
    id: ArticleId,
    title: String,
    // Field position; benched articles carry none.
    #[serde(default)]
    role: Option<Role>,
    tier: ContractTier,
    points: u32,
    purchase_price: u64,
    current_value: u64,
    days_remaining: i64,
}

impl SeedArticle {
    fn article_ref(&self) -> ArticleRef {
        ArticleRef { id: self.id, title: self.title.clone() }
    }

    fn into_contract(self, now: DateTime<Utc>) -> OwnedContract {
        OwnedContract {
            article: ArticleRef { id: self.id, title: self.title },
            tier: self.tier,
            purchase_price: self.purchase_price,
            current_value: self.current_value,
            points: self.points,
            signed_at: now,
            ends_at: now + Duration::days(self.days_remaining),
        }
    }
}

/// Build the starting lineup and its contracts, every contract clock
/// anchored at `now`.
pub fn seeded_team(
    formation: Formation,
    now: DateTime<Utc>,
) -> Result<(TeamStore, Vec<OwnedContract>)> {
    let doc: TeamDoc = serde_json::from_str(TEAM_SEED).context("Team seed is not valid JSON")?;
    let mut lineup = Lineup::new(formation);
    let mut contracts = Vec::with_capacity(doc.articles.len());
    for seed in doc.articles {
        match seed.role {
            Some(role) => lineup.place(role, seed.article_ref()),
            None => lineup.add_to_bench(seed.article_ref()),
        }
        .with_context(|| format!("Cannot seat seeded article {}", seed.id))?;
        contracts.push(seed.into_contract(now));
    }
    info!("Seeded team: {} articles in a {}", contracts.len(), lineup.formation());
    Ok((TeamStore::new(lineup), contracts))
}

#[derive(Debug, Deserialize)]
struct ProposalsDoc {
    proposals: Vec<SeedProposal>,
}

#[derive(Debug, Deserialize)]
struct SeedProposal {
    id: u64,
    league_id: String,
    direction: Direction,
    from_user: String,
    from_team: String,
    to_user: String,
    to_team: String,
    #[serde(default)]
    offered_article: Option<ProposalArticle>,
    #[serde(default)]
    offered_credits: Option<u64>,
    requested_article: ProposalArticle,
    tier_label: String,
    hours_ago: i64,
}

/// Inbox preloaded with the session's open proposals. Every seed starts
/// pending; `created_at` runs backwards from `now` by each seed's age.
pub fn seeded_inbox(now: DateTime<Utc>) -> Result<TradeInbox> {
    let doc: ProposalsDoc =
        serde_json::from_str(PROPOSALS_SEED).context("Proposal seed is not valid JSON")?;
    let mut inbox = TradeInbox::new();
    for seed in doc.proposals {
        let proposal = TradeProposal {
            id: ProposalId(seed.id),
            league_id: seed.league_id,
            direction: seed.direction,
            status: ProposalStatus::Pending,
            from_user: seed.from_user,
            from_team: seed.from_team,
            to_user: seed.to_user,
            to_team: seed.to_team,
            offered_article: seed.offered_article,
            offered_credits: seed.offered_credits,
            requested_article: seed.requested_article,
            tier_label: seed.tier_label,
            created_at: now - Duration::hours(seed.hours_ago),
        };
        inbox
            .submit(proposal)
            .with_context(|| format!("Cannot file seeded proposal {}", seed.id))?;
    }
    info!("Seeded trade inbox: {} proposals", inbox.len());
    Ok(inbox)
}
