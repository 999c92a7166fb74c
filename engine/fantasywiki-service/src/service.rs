//! Service state management and engine composition
//!
//! [`ServiceState`] owns one seeded instance of every engine and exposes the
//! player-facing operations that cut across them, such as purchases that both
//! debit the contract book and seat the article on the bench.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::seed;
use crate::session::SessionState;
use article_registry::{Article, ArticleId, ArticleRegistry};
use chemistry_engine::{ChemistryEngine, ChemistryLink, Neighbor};
use contract_service::{ContractBook, OwnedContract};
use league_service::{LeaderboardEntry, LeagueDirectory, LeagueInfo, ViewMode};
use lineup_service::TeamStore;
use pricing_engine::{ContractTier, PriceCalculator, PriceQuote, PricingConfig};
use trade_service::TradeInbox;

/// Headline numbers for the session dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub credits: u64,
    pub portfolio_value: u64,
    pub team_points: u32,
    pub pending_trades: usize,
}

/// Service state containing all seeded engines
pub struct ServiceState {
    /// Service configuration
    pub config: ServiceConfig,

    /// Market article catalogue
    pub registry: ArticleRegistry,

    /// Chemistry links and neighbor queries
    pub chemistry: ChemistryEngine,

    /// The player's lineup, shared with swap sessions
    pub team: TeamStore,

    /// Owned contracts and the credit balance
    pub book: ContractBook,

    /// League directory and standings
    pub leagues: LeagueDirectory,

    /// Open trade proposals
    pub inbox: TradeInbox,

    /// Player identity and league selection
    pub session: SessionState,
}

impl ServiceState {
    /// Create a new service state with every engine seeded. All contract
    /// clocks and proposal ages are anchored at `now`.
    pub fn new(config: ServiceConfig, now: DateTime<Utc>) -> Result<Self> {
        info!("Initializing FantasyWiki engines...");
        config.validate().map_err(anyhow::Error::msg)?;

        info!("Loading article catalogue...");
        let registry =
            article_registry::seeded_at(now).context("Failed to load the article catalogue")?;
        info!("Article catalogue ready: {} articles", registry.len());

        let pricing_config = PricingConfig::from_env();
        pricing_config.validate().context("Invalid pricing configuration")?;
        let calculator = PriceCalculator::new(pricing_config);

        let chemistry = ChemistryEngine::seeded();

        info!("Seeding team and contracts...");
        let (team, contracts) =
            seed::seeded_team(config.default_formation, now).context("Failed to seed the team")?;
        let mut book = ContractBook::with_calculator(config.starting_credits, calculator);
        for contract in contracts {
            let id = contract.article.id;
            book.adopt(contract)
                .with_context(|| format!("Failed to adopt seeded contract {id}"))?;
        }

        info!("Loading leagues...");
        let leagues = league_service::seeded().context("Failed to load the league directory")?;

        let inbox = seed::seeded_inbox(now).context("Failed to seed the trade inbox")?;

        let session = SessionState::new(&config);
        info!("Service state ready ({} credits, {} contracts)", book.balance(), book.len());

        Ok(Self { config, registry, chemistry, team, book, leagues, inbox, session })
    }

    /// Every market article, cheapest first.
    pub fn market(&self) -> Vec<&Article> {
        self.registry.all()
    }

    /// Market articles without an owner.
    pub fn free_agents(&self) -> Vec<&Article> {
        self.registry.free_agents()
    }

    /// Case-insensitive market search over titles.
    pub fn search_market(&self, query: &str) -> Vec<&Article> {
        self.registry.search(query)
    }

    /// Price one article at one tier.
    pub fn market_quote(&self, id: ArticleId, tier: ContractTier) -> Result<PriceQuote> {
        let article = self.registry.get(id)?;
        Ok(self.book.quote(article, tier)?)
    }

    /// Quotes for all four tiers of one article, for the purchase dialog.
    pub fn tier_sheet(&self, id: ArticleId) -> Result<Vec<PriceQuote>> {
        let article = self.registry.get(id)?;
        let mut sheet = Vec::with_capacity(ContractTier::ALL.len());
        for tier in ContractTier::ALL {
            sheet.push(self.book.quote(article, tier)?);
        }
        Ok(sheet)
    }

    /// Buy a contract on a market article and seat it on the bench.
    pub fn purchase_article(
        &mut self,
        id: ArticleId,
        tier: ContractTier,
        now: DateTime<Utc>,
    ) -> Result<OwnedContract> {
        if self.team.snapshot().contains(id) {
            return Err(ServiceError::AlreadyRostered { id }.into());
        }
        let article = self.registry.get(id)?.clone();
        let contract = self.book.purchase(&article, tier, now)?;
        self.team.add_to_bench(article.as_ref())?;
        info!("'{}' joins the bench", article.title);
        Ok(contract)
    }

    /// Extend an owned contract by one tier duration.
    pub fn renew_contract(&mut self, id: ArticleId) -> Result<OwnedContract> {
        Ok(self.book.renew(id)?)
    }

    /// Drop a contract and pull the article off the roster.
    pub fn release_article(&mut self, id: ArticleId) -> Result<OwnedContract> {
        let contract = self.book.release(id)?;
        self.team.remove(id)?;
        Ok(contract)
    }

    /// Chemistry links over the current lineup.
    pub fn lineup_chemistry(&self) -> Vec<ChemistryLink> {
        self.chemistry.generate_links(&self.team.position_groups())
    }

    /// Chemistry neighbors of one fielded article.
    pub fn article_neighbors(&self, id: ArticleId) -> Vec<Neighbor> {
        self.chemistry.neighbors(id, &self.team.position_groups())
    }

    /// Standings view for the session's league.
    pub fn leaderboard(&self, mode: ViewMode) -> Vec<&LeaderboardEntry> {
        self.leagues.view(self.session.selected_league(), mode)
    }

    /// Info block for the session's league, falling back to the global
    /// league when the selection is unknown.
    pub fn selected_league_info(&self) -> Result<&LeagueInfo> {
        let selected = self.session.selected_league();
        if self.leagues.contains(selected) {
            Ok(self.leagues.info(selected)?)
        } else {
            Ok(self.leagues.info(league_service::directory::GLOBAL_LEAGUE)?)
        }
    }

    /// Headline numbers for the dashboard.
    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary {
            credits: self.book.balance(),
            portfolio_value: self.book.portfolio_value(),
            team_points: self.book.total_points(),
            pending_trades: self.inbox.total_pending_count(),
        }
    }
}
