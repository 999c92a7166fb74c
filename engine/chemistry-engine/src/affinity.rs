//! Title-keyed affinity table
//!
//! A hand-picked association list between article titles. The table is
//! symmetric in effect: lookups try both orderings. Pairs not listed fall
//! back to `Weak` rather than `Poor`, so every adjacent pair carries at
//! least a small bonus.

use crate::types::ChemistryTier;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AffinityTable {
    pairs: HashMap<(String, String), ChemistryTier>,
}

impl AffinityTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The seeded association list.
    pub fn seeded() -> Self {
        let mut table = Self::empty();

        let excellent = [
            ("Bitcoin", "Ethereum"),
            ("Bitcoin", "Blockchain"),
            ("Ethereum", "Blockchain"),
            ("AI", "Machine Learning"),
            ("Machine Learning", "Python"),
            ("JavaScript", "TypeScript"),
            ("JavaScript", "React"),
            ("TypeScript", "React"),
        ];
        for (a, b) in excellent {
            table.insert(a, b, ChemistryTier::Excellent);
        }

        let good = [
            ("Cloud Computing", "AI"),
            ("Cloud Computing", "Machine Learning"),
            ("Python", "JavaScript"),
            ("Bitcoin", "AI"),
        ];
        for (a, b) in good {
            table.insert(a, b, ChemistryTier::Good);
        }

        let weak = [("Ethereum", "AI"), ("Wikipedia", "React")];
        for (a, b) in weak {
            table.insert(a, b, ChemistryTier::Weak);
        }

        table
    }

    pub fn insert(&mut self, a: &str, b: &str, tier: ChemistryTier) {
        self.pairs.insert((a.to_string(), b.to_string()), tier);
    }

    /// Tier for a pair of titles, trying both orderings.
    pub fn lookup(&self, a: &str, b: &str) -> ChemistryTier {
        self.pairs
            .get(&(a.to_string(), b.to_string()))
            .or_else(|| self.pairs.get(&(b.to_string(), a.to_string())))
            .copied()
            .unwrap_or(ChemistryTier::Weak)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
