//! The contract book: balance plus owned contracts

use crate::balance::CreditBalance;
use crate::contract::OwnedContract;
use crate::error::ContractError;
use crate::Result;
use article_registry::{Article, ArticleId};
use chrono::{DateTime, Utc};
use pricing_engine::{ContractTier, PriceCalculator, PriceQuote};
use std::collections::HashMap;
use tracing::info;

/// One user's credit balance and contract holdings.
///
/// All purchases and renewals flow through here so the balance and the
/// contract map never disagree.
pub struct ContractBook {
    contracts: HashMap<ArticleId, OwnedContract>,
    balance: CreditBalance,
    calculator: PriceCalculator,
}

impl ContractBook {
    pub fn new(starting_credits: u64) -> Self {
        Self::with_calculator(starting_credits, PriceCalculator::default())
    }

    pub fn with_calculator(starting_credits: u64, calculator: PriceCalculator) -> Self {
        Self {
            contracts: HashMap::new(),
            balance: CreditBalance::new(starting_credits),
            calculator,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance.available()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Price an article without committing to it.
    pub fn quote(&self, article: &Article, tier: ContractTier) -> Result<PriceQuote> {
        Ok(self.calculator.quote(article, tier)?)
    }

    /// Buy a contract on `article` at `tier`.
    ///
    /// Quotes through the pricing engine, debits the balance, and records
    /// the contract. Fails without side effects when the article is already
    /// owned or the balance cannot cover the final price.
    pub fn purchase(
        &mut self,
        article: &Article,
        tier: ContractTier,
        now: DateTime<Utc>,
    ) -> Result<OwnedContract> {
        if self.contracts.contains_key(&article.id) {
            return Err(ContractError::AlreadyOwned { id: article.id });
        }

        let quote = self.calculator.quote(article, tier)?;
        self.balance.debit(quote.final_price)?;

        let contract = OwnedContract::sign(article.as_ref(), tier, quote.final_price, now);
        info!(
            "Signed {} contract on '{}' for {} credits ({} remaining)",
            tier,
            article.title,
            quote.final_price,
            self.balance.available()
        );
        self.contracts.insert(article.id, contract.clone());
        Ok(contract)
    }

    /// Extend a contract by one tier duration at the tier's renewal cost.
    pub fn renew(&mut self, id: ArticleId) -> Result<OwnedContract> {
        let cost = self.contract(id)?.tier.renewal_cost();
        self.balance.debit(cost)?;

        let contract =
            self.contracts.get_mut(&id).ok_or(ContractError::ContractNotFound { id })?;
        contract.extend();
        info!(
            "Renewed {} contract on '{}' for {} credits",
            contract.tier, contract.article.title, cost
        );
        Ok(contract.clone())
    }

    /// Drop a contract. The credits spent on it are gone.
    pub fn release(&mut self, id: ArticleId) -> Result<OwnedContract> {
        let contract =
            self.contracts.remove(&id).ok_or(ContractError::ContractNotFound { id })?;
        info!("Released contract on '{}'", contract.article.title);
        Ok(contract)
    }

    /// Record an existing contract as-is, without touching the balance.
    /// Seed data enters through here.
    pub fn adopt(&mut self, contract: OwnedContract) -> Result<()> {
        let id = contract.article.id;
        if self.contracts.contains_key(&id) {
            return Err(ContractError::AlreadyOwned { id });
        }
        self.contracts.insert(id, contract);
        Ok(())
    }

    pub fn contract(&self, id: ArticleId) -> Result<&OwnedContract> {
        self.contracts.get(&id).ok_or(ContractError::ContractNotFound { id })
    }

    /// All contracts, ordered by article id.
    pub fn contracts(&self) -> Vec<&OwnedContract> {
        let mut all: Vec<&OwnedContract> = self.contracts.values().collect();
        all.sort_by_key(|c| c.article.id);
        all
    }

    pub fn set_current_value(&mut self, id: ArticleId, value: u64) -> Result<()> {
        let contract =
            self.contracts.get_mut(&id).ok_or(ContractError::ContractNotFound { id })?;
        contract.current_value = value;
        Ok(())
    }

    /// Sum of current values across the book.
    pub fn portfolio_value(&self) -> u64 {
        self.contracts.values().map(|c| c.current_value).sum()
    }

    pub fn total_points(&self) -> u32 {
        self.contracts.values().map(|c| c.points).sum()
    }
}
