//! Chemistry tiers, links, and neighbor records

use article_registry::{ArticleId, ArticleRef};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChemistryTier {
    Excellent,
    Good,
    Weak,
    Poor,
}

impl ChemistryTier {
    pub fn label(&self) -> &'static str {
        match self {
            ChemistryTier::Excellent => "Excellent",
            ChemistryTier::Good => "Good",
            ChemistryTier::Weak => "Weak",
            ChemistryTier::Poor => "Poor",
        }
    }

    /// Fractional scoring bonus for a link of this tier
    pub fn bonus(&self) -> Decimal {
        match self {
            ChemistryTier::Excellent => Decimal::new(20, 2), // 0.20
            ChemistryTier::Good => Decimal::new(10, 2),      // 0.10
            ChemistryTier::Weak => Decimal::new(5, 2),       // 0.05
            ChemistryTier::Poor => Decimal::ZERO,
        }
    }

    pub fn bonus_percent(&self) -> u8 {
        match self {
            ChemistryTier::Excellent => 20,
            ChemistryTier::Good => 10,
            ChemistryTier::Weak => 5,
            ChemistryTier::Poor => 0,
        }
    }
}

impl fmt::Display for ChemistryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One chemistry link between two adjacent lineup slots.
///
/// The pair is unordered; links are normalized with the lower article id in
/// `a` so equal pairs compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemistryLink {
    pub a: ArticleRef,
    pub b: ArticleRef,
    pub tier: ChemistryTier,
}

impl ChemistryLink {
    pub fn touches(&self, id: ArticleId) -> bool {
        self.a.id == id || self.b.id == id
    }

    pub fn connects(&self, one: ArticleId, other: ArticleId) -> bool {
        (self.a.id == one && self.b.id == other) || (self.a.id == other && self.b.id == one)
    }
}

/// An adjacent article together with the chemistry of the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub article: ArticleRef,
    pub tier: ChemistryTier,
}
