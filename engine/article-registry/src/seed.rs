//! Embedded catalogue seed
//!
//! In a production system the catalogue would be filled by an ingestion
//! pipeline; this module loads the static seed document instead. Contract
//! expiries are stored as day offsets and resolved against a caller-supplied
//! "now" so that seeding stays deterministic.

use crate::error::RegistryError;
use crate::registry::ArticleRegistry;
use crate::types::{Article, ArticleId, ArticleOwner, Trend};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tracing::info;

const CATALOGUE_SEED: &str = include_str!("../data/catalogue.json");

#[derive(Debug, Deserialize)]
struct CatalogueDoc {
    articles: Vec<SeedArticle>,
}

/// Seed-document schema: like `Article`, but expiry is a relative offset
#[derive(Debug, Deserialize)]
struct SeedArticle {
    id: ArticleId,
    title: String,
    views_30d: u64,
    views_last_7d: u64,
    views_prev_7d: u64,
    base_price: u64,
    trend: Trend,
    #[serde(default)]
    owner: Option<ArticleOwner>,
    #[serde(default)]
    expires_in_days: Option<i64>,
}

impl SeedArticle {
    fn into_article(self, now: DateTime<Utc>) -> Article {
        Article {
            id: self.id,
            title: self.title,
            views_30d: self.views_30d,
            views_last_7d: self.views_last_7d,
            views_prev_7d: self.views_prev_7d,
            base_price: self.base_price,
            trend: self.trend,
            owner: self.owner,
            expires_at: self.expires_in_days.map(|days| now + Duration::days(days)),
        }
    }
}

/// Build the seeded catalogue, resolving expiry offsets against `now`
pub fn seeded_at(now: DateTime<Utc>) -> Result<ArticleRegistry, RegistryError> {
    let doc: CatalogueDoc = serde_json::from_str(CATALOGUE_SEED)?;

    let mut registry = ArticleRegistry::new();
    for seed in doc.articles {
        registry.insert(seed.into_article(now))?;
    }

    info!("Seeded article catalogue with {} articles", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads_full_catalogue() {
        let registry = seeded_at(Utc::now()).unwrap();
        assert_eq!(registry.len(), 10);

        let bitcoin = registry.get_by_title("Bitcoin").unwrap();
        assert_eq!(bitcoin.base_price, 150);
        assert!(bitcoin.is_free_agent());
    }

    #[test]
    fn test_seed_resolves_expiries_against_now() {
        let now = Utc::now();
        let registry = seeded_at(now).unwrap();

        let ai = registry.get_by_title("Artificial Intelligence").unwrap();
        assert_eq!(ai.owner.as_ref().unwrap().name, "CryptoKing42");
        assert_eq!(ai.days_until_expiry(now), Some(3));

        let nft = registry.get_by_title("NFT").unwrap();
        assert_eq!(nft.days_until_expiry(now), Some(2));
    }

    #[test]
    fn test_seed_free_agents() {
        let registry = seeded_at(Utc::now()).unwrap();
        // Three seeded articles are under contract
        assert_eq!(registry.free_agents().len(), 7);
    }
}
